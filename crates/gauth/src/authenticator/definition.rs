use crate::{config::TotpSettings, Result};

/// TOTP verifier
///
/// Owns the one-time password algorithm; accounts only hold the secret it
/// hands out and ask it whether a code is currently valid. Digits, step,
/// window and QR options always come from the caller's configuration.
pub trait AbstractAuthenticator: Send + Sync {
    /// Generate a new shared secret
    fn generate_secret(&self) -> Result<String>;

    /// Check a code against a secret, accepting `settings.window` time steps either side of now
    fn verify(&self, settings: &TotpSettings, secret: &str, code: &str) -> Result<bool>;

    /// Build a URL that renders the secret as a scannable QR code
    fn provisioning_url(
        &self,
        settings: &TotpSettings,
        display_name: &str,
        secret: &str,
    ) -> Result<String>;
}

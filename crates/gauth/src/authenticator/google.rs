use std::time::{SystemTime, UNIX_EPOCH};

use base32::Alphabet;
use reqwest::Url;
use subtle::ConstantTimeEq;
use totp_lite::{totp_custom, Sha1};

use crate::{config::TotpSettings, Error, Result};

use super::AbstractAuthenticator;

const ALPHABET: Alphabet = Alphabet::RFC4648 { padding: false };

/// Bytes of entropy in a generated secret (16 base32 characters)
const SECRET_BYTES: usize = 10;

/// Google Authenticator compatible TOTP (HMAC-SHA1)
///
/// Holds no settings of its own, every call is given the configured ones.
#[derive(Default, Clone, Copy, Debug)]
pub struct GoogleAuthenticator;

impl GoogleAuthenticator {
    fn decode_secret(&self, secret: &str) -> Result<Vec<u8>> {
        let normalised = secret.trim_end_matches('=').to_ascii_uppercase();

        base32::decode(ALPHABET, &normalised)
            .filter(|key| !key.is_empty())
            .ok_or(Error::InvalidSecret)
    }

    fn step(&self, settings: &TotpSettings) -> Result<u64> {
        match settings.step {
            0 => Err(Error::IncorrectData { with: "step" }),
            step => Ok(step),
        }
    }

    /// Code for the time step containing `time` (unix seconds)
    pub fn code_at(&self, settings: &TotpSettings, secret: &str, time: u64) -> Result<String> {
        let key = self.decode_secret(secret)?;
        let step = self.step(settings)?;

        Ok(totp_custom::<Sha1>(
            step,
            settings.digits,
            &key,
            time / step * step,
        ))
    }

    /// Check a code against the steps around `time` (unix seconds)
    pub fn verify_at(
        &self,
        settings: &TotpSettings,
        secret: &str,
        code: &str,
        time: u64,
    ) -> Result<bool> {
        let key = self.decode_secret(secret)?;
        let step = self.step(settings)?;

        if code.len() != settings.digits as usize {
            return Ok(false);
        }

        let current = time / step;
        let window = u64::from(settings.window);

        for slice in current.saturating_sub(window)..=current.saturating_add(window) {
            let expected = totp_custom::<Sha1>(step, settings.digits, &key, slice * step);

            if bool::from(expected.as_bytes().ct_eq(code.as_bytes())) {
                return Ok(true);
            }
        }

        Ok(false)
    }

/// `otpauth://` URI understood by authenticator apps
    pub fn otpauth_uri(&self, settings: &TotpSettings, label: &str, secret: &str) -> Result<String> {
        let mut uri = Url::parse("otpauth://totp/").map_err(|_| Error::InternalError)?;
        uri.set_path(&format!("/{label}"));

        {
            let mut query = uri.query_pairs_mut();
            query.append_pair("secret", secret);

            if let Some(issuer) = &settings.issuer {
                query.append_pair("issuer", issuer);
            }
        }

        Ok(uri.into())
    }
}

fn now() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .map_err(|_| Error::InternalError)
}

impl AbstractAuthenticator for GoogleAuthenticator {
    fn generate_secret(&self) -> Result<String> {
        let secret: [u8; SECRET_BYTES] = rand::random();
        Ok(base32::encode(ALPHABET, &secret))
    }

    fn verify(&self, settings: &TotpSettings, secret: &str, code: &str) -> Result<bool> {
        self.verify_at(settings, secret, code, now()?)
    }

    fn provisioning_url(
        &self,
        settings: &TotpSettings,
        display_name: &str,
        secret: &str,
    ) -> Result<String> {
        let otpauth = self.otpauth_uri(settings, display_name, secret)?;
        let size = format!("{0}x{0}", settings.qr_size);

        let url = Url::parse_with_params(
            &settings.qr_endpoint,
            &[
                ("data", otpauth.as_str()),
                ("size", size.as_str()),
                ("ecc", settings.qr_ecc.as_str()),
            ],
        )
        .map_err(|_| Error::IncorrectData {
            with: "qr_endpoint",
        })?;

        Ok(url.into())
    }
}

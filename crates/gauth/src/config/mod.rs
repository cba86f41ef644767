mod qr_code;
mod totp;

pub use qr_code::*;
pub use totp::*;

/// gauth configuration
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    /// TOTP parameters and provisioning URL options
    pub totp: TotpSettings,

    /// QR code display and image fetching
    pub qr_code: QrCode,
}

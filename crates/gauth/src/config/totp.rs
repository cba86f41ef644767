/// QR error correction level requested from the image service
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorCorrection {
    /// ~7% recovery
    L,
    /// ~15% recovery
    #[default]
    M,
    /// ~25% recovery
    Q,
    /// ~30% recovery
    H,
}

impl ErrorCorrection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        }
    }
}

/// TOTP settings
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TotpSettings {
    /// Number of digits in a code
    pub digits: u32,

    /// Length of a time step in seconds
    pub step: u64,

    /// Time steps either side of the current one a code is accepted for
    ///
    /// Account verification uses zero, i.e. only the current step.
    pub window: u8,

    /// Issuer shown by authenticator apps
    pub issuer: Option<String>,

    /// Image service used to render provisioning URIs as QR codes
    pub qr_endpoint: String,

    /// Edge length of the rendered QR image in pixels
    pub qr_size: u32,

    /// Error correction level of the rendered QR image
    pub qr_ecc: ErrorCorrection,
}

impl Default for TotpSettings {
    fn default() -> TotpSettings {
        TotpSettings {
            digits: 6,
            step: totp_lite::DEFAULT_STEP,
            window: 0,
            issuer: None,
            qr_endpoint: "https://api.qrserver.com/v1/create-qr-code/".into(),
            qr_size: 200,
            qr_ecc: ErrorCorrection::M,
        }
    }
}

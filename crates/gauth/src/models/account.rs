use iso8601_timestamp::Timestamp;

use super::Secret;

/// Verification attempts available after enrollment or a successful code
pub const MAX_ATTEMPTS: u8 = 3;

/// Two-factor state of an account
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TwoFactorState {
    /// No secret, every code passes
    Disabled,
    /// Secret present with attempts left
    Active,
    /// Secret present with no attempts left, every code fails
    LockedOut,
}

/// Outcome of a single verification attempt
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "outcome")]
pub enum Verification {
    /// Account has no secret
    Disabled,
    /// Code matched
    Accepted,
    /// Code did not match
    Rejected { remaining_attempts: u8 },
    /// No attempts were left, code was not checked
    LockedOut,
}

impl Verification {
    /// Whether the attempt counts as a pass
    pub fn is_success(&self) -> bool {
        matches!(self, Verification::Disabled | Verification::Accepted)
    }
}

/// Two-factor account
///
/// Host account types embed this value rather than extending it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TwoFactorAccount {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    /// Shared TOTP secret, 2FA is disabled if absent or empty
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub secret: Option<Secret>,

    /// Whether the last activation attempt verified
    #[serde(default)]
    pub activated: bool,

    /// Verification attempts left before lockout
    pub remaining_attempts: u8,

    /// Time at which the current secret was generated
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub enrolled_at: Option<Timestamp>,
}

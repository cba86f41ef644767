//! `2fa` validation rule for request data
use crate::{Error, GAuth, Result};

/// Name the rule is registered under
pub const RULE_NAME: &str = "2fa";

/// Message shown for a failing code
pub const RULE_MESSAGE: &str = "Invalid code submitted for 2 Factor Authentication";

/// Finds the account a submitted code belongs to
#[async_trait]
pub trait AccountResolver: Sync {
    /// Id of the currently authenticated account
    async fn authenticated(&self) -> Result<Option<String>>;

    /// Id of the account bound to a named route parameter
    async fn route_parameter(&self, name: &str) -> Result<Option<String>>;
}

/// Validates a submitted TOTP code
///
/// Without parameters the code is checked against the authenticated
/// account, otherwise against the account bound to the route parameter
/// named by the first one.
#[derive(Default, Clone, Copy, Debug)]
pub struct TwoFactorRule;

impl TwoFactorRule {
    pub fn name(&self) -> &'static str {
        RULE_NAME
    }

    pub fn message(&self) -> &'static str {
        RULE_MESSAGE
    }

    /// Whether the submitted value is a valid code
    pub async fn passes(
        &self,
        gauth: &GAuth,
        resolver: &dyn AccountResolver,
        value: Option<&str>,
        parameters: &[String],
    ) -> Result<bool> {
        let id = match parameters.first() {
            Some(name) => resolver.route_parameter(name).await?,
            None => resolver.authenticated().await?,
        }
        .ok_or(Error::UnknownUser)?;

        gauth.verify_account(&id, value).await
    }
}

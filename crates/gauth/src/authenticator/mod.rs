use std::ops::Deref;
use std::sync::Arc;

mod definition;
mod google;

pub use definition::AbstractAuthenticator;
pub use google::GoogleAuthenticator;

/// TOTP verifier in use
#[derive(Clone)]
pub enum Authenticator {
    Google(GoogleAuthenticator),
    Custom(Arc<dyn AbstractAuthenticator>),
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::Google(GoogleAuthenticator)
    }
}

impl Deref for Authenticator {
    type Target = dyn AbstractAuthenticator;

    fn deref(&self) -> &Self::Target {
        match self {
            Authenticator::Google(google) => google,
            Authenticator::Custom(custom) => custom.as_ref(),
        }
    }
}

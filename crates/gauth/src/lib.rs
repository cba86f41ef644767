#[macro_use]
extern crate serde;
#[macro_use]
extern crate async_trait;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate serde_json;

mod result;
pub use result::*;

pub mod authenticator;
pub mod config;
pub mod database;
pub mod events;
pub mod r#impl;
pub mod locks;
pub mod models;
pub mod rules;


pub use authenticator::{AbstractAuthenticator, Authenticator, GoogleAuthenticator};
pub use config::Config;
pub use database::{AbstractDatabase, Database};
pub use events::GAuthEvent;

use async_std::channel::Sender;

use crate::locks::AccountLocks;

/// gauth state
///
/// Everything an account operation needs is reached through this value;
/// nothing is looked up globally.
#[derive(Default, Clone)]
pub struct GAuth {
    pub config: Config,
    pub database: Database,
    pub authenticator: Authenticator,
    pub event_channel: Option<Sender<GAuthEvent>>,
    pub locks: AccountLocks,
}

impl GAuth {
    /// Create state using the built-in Google Authenticator compatible verifier
    pub fn new(config: Config, database: Database) -> GAuth {
        GAuth {
            config,
            database,
            authenticator: Authenticator::Google(GoogleAuthenticator),
            event_channel: None,
            locks: Default::default(),
        }
    }

    pub async fn publish_event(&self, event: GAuthEvent) {
        if let Some(sender) = &self.event_channel {
            if let Err(err) = sender.send(event).await {
                error!("Failed to publish a gauth event: {:?}", err);
            }
        }
    }

    /// Verify a code against a stored account
    ///
    /// Attempts against the same account id are serialised: the account is
    /// reloaded, checked and written back while the lock is held, so
    /// concurrent requests cannot lose counter updates.
    pub async fn verify_account(&self, id: &str, code: Option<&str>) -> Result<bool> {
        let lock = self.locks.acquire(id).await;

        let result = async {
            let _guard = lock.lock().await;
            let mut account = self.database.find_account(id).await?;
            account.verify_code(self, code).await
        }
        .await;

        self.locks.release(id, lock).await;
        result
    }
}

use crate::{models::TwoFactorAccount, Error, Result, Success};

use futures::lock::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use super::definition::AbstractDatabase;

#[derive(Default, Clone)]
pub struct DummyDb {
    pub accounts: Arc<Mutex<HashMap<String, TwoFactorAccount>>>,
}

#[async_trait]
impl AbstractDatabase for DummyDb {
    /// Find account by id
    async fn find_account(&self, id: &str) -> Result<TwoFactorAccount> {
        let accounts = self.accounts.lock().await;
        accounts.get(id).cloned().ok_or(Error::UnknownUser)
    }

    /// Save account
    async fn save_account(&self, account: &TwoFactorAccount) -> Success {
        let mut accounts = self.accounts.lock().await;
        accounts.insert(account.id.to_string(), account.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AbstractDatabase, DummyDb};
    use crate::{models::TwoFactorAccount, Error};

    #[async_std::test]
    async fn it_saves_and_finds_accounts() {
        let db = DummyDb::default();
        let account = TwoFactorAccount::new("account");

        db.save_account(&account).await.unwrap();
        assert_eq!(db.find_account("account").await, Ok(account));
    }

    #[async_std::test]
    async fn it_overwrites_on_save() {
        let db = DummyDb::default();
        let mut account = TwoFactorAccount::new("account");
        db.save_account(&account).await.unwrap();

        account.remaining_attempts = 1;
        db.save_account(&account).await.unwrap();

        assert_eq!(
            db.find_account("account").await.unwrap().remaining_attempts,
            1
        );
        assert_eq!(db.accounts.lock().await.len(), 1);
    }

    #[async_std::test]
    async fn it_reports_unknown_accounts() {
        let db = DummyDb::default();
        assert_eq!(db.find_account("missing").await, Err(Error::UnknownUser));
    }
}

use crate::{models::TwoFactorAccount, Result, Success};

#[async_trait]
pub trait AbstractDatabase: std::marker::Sync + std::marker::Send {
    /// Find account by id
    async fn find_account(&self, id: &str) -> Result<TwoFactorAccount>;

    /// Save account
    async fn save_account(&self, account: &TwoFactorAccount) -> Success;
}

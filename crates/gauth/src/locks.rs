use std::collections::HashMap;
use std::sync::Arc;

use futures::lock::Mutex;

/// Per-account locks
///
/// Entries exist only while some task holds a handle to them.
#[derive(Default, Clone)]
pub struct AccountLocks {
    locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl AccountLocks {
    /// Take a handle to the lock of an account
    pub async fn acquire(&self, id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(id.to_string()).or_default().clone()
    }

    /// Give back a handle, dropping the entry if nobody else holds one
    pub async fn release(&self, id: &str, lock: Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().await;

        // the map and `lock` itself
        if Arc::strong_count(&lock) == 2 {
            locks.remove(id);
        }
    }

    /// Whether no account lock is currently handed out
    pub async fn is_empty(&self) -> bool {
        self.locks.lock().await.is_empty()
    }
}

//! In-memory reference store.

use crate::traits::{AccountMutator, AccountStore};
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;
use veridian_core::{Account, AccountId, IdentityResult};

/// Volatile in-memory account store.
///
/// Records live in a `BTreeMap` keyed by id; since the allocator hands
/// out strictly increasing ids, key order equals insertion order, which
/// pins the scan order the service's email lookups rely on. The allocator
/// is a plain atomic counter, so concurrent `allocate` calls are
/// linearizable without taking the map lock.
pub struct InMemoryAccountStore {
    next_id: AtomicI64,
    accounts: RwLock<BTreeMap<AccountId, Account>>,
}

impl InMemoryAccountStore {
    /// Creates an empty store with the allocator at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            accounts: RwLock::new(BTreeMap::new()),
        }
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Returns whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn allocate(&self) -> IdentityResult<AccountId> {
        let id = AccountId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        debug!("Store: allocated id {}", id);
        Ok(id)
    }

    async fn put(&self, account: Account) -> IdentityResult<()> {
        debug!("Store: put account {}", account.id);
        self.accounts.write().await.insert(account.id, account);
        Ok(())
    }

    async fn get(&self, id: AccountId) -> IdentityResult<Option<Account>> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: AccountId) -> IdentityResult<bool> {
        let removed = self.accounts.write().await.remove(&id).is_some();
        debug!("Store: delete account {} (existed: {})", id, removed);
        Ok(removed)
    }

    async fn update(
        &self,
        id: AccountId,
        mutate: AccountMutator,
    ) -> IdentityResult<Option<Account>> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.get_mut(&id).map(|account| {
            mutate(account);
            account.clone()
        }))
    }

    async fn scan(&self) -> IdentityResult<BoxStream<'static, Account>> {
        // Snapshot under the read lock, then stream lazily over it.
        let snapshot: Vec<Account> = self.accounts.read().await.values().cloned().collect();
        Ok(stream::iter(snapshot).boxed())
    }
}

impl std::fmt::Debug for InMemoryAccountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryAccountStore").finish_non_exhaustive()
    }
}

//! Store trait definitions.

use async_trait::async_trait;
use futures::stream::BoxStream;
use veridian_core::{Account, AccountId, IdentityResult};

/// A single-record mutation applied under the store's write lock.
pub type AccountMutator = Box<dyn FnOnce(&mut Account) + Send>;

/// Account store trait.
///
/// Operations on distinct ids are independent; the store does not enforce
/// cross-field uniqueness; duplicate emails are permitted, and lookup
/// semantics on duplicates belong to the service layer. Every method
/// returns [`IdentityResult`]: the in-memory reference store never fails,
/// but a durable backend may surface timeouts or I/O errors, which the
/// service propagates unchanged.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Returns the next unused account id, advancing the internal
    /// counter. Allocation is linearizable: two concurrent calls never
    /// receive the same id. Ids start at 1 and are never recycled.
    async fn allocate(&self) -> IdentityResult<AccountId>;

    /// Inserts or replaces the record at `account.id`.
    async fn put(&self, account: Account) -> IdentityResult<()>;

    /// Returns the record at `id`. Absence is a valid outcome, not an
    /// error.
    async fn get(&self, id: AccountId) -> IdentityResult<Option<Account>>;

    /// Removes the record at `id`, returning whether one existed.
    async fn delete(&self, id: AccountId) -> IdentityResult<bool>;

    /// Applies a read-modify-write mutation to the record at `id` while
    /// holding the store's write lock, returning the updated record, or
    /// `None` if there is no record at `id`. Two concurrent updates to
    /// the same id serialize; neither loses the other's write.
    async fn update(
        &self,
        id: AccountId,
        mutate: AccountMutator,
    ) -> IdentityResult<Option<Account>>;

    /// Produces a lazy, non-restartable snapshot of all current records
    /// in insertion order. Used by the service for email scans; the
    /// ordering fixes "first match wins" to "first created wins".
    async fn scan(&self) -> IdentityResult<BoxStream<'static, Account>>;
}

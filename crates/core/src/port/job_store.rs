// Job Store Port (Interface)

use crate::domain::JobRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Store interface for the per-user job collection.
///
/// Every operation is scoped by the invoking user's identifier, so no
/// call can observe or mutate another user's records.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Look up a single record by its composite key.
    async fn get(&self, user_id: &str, name: &str) -> Result<Option<JobRecord>>;

    /// Insert or replace a record.
    async fn put(&self, record: &JobRecord) -> Result<()>;

    /// Remove a record by its composite key.
    async fn delete(&self, user_id: &str, name: &str) -> Result<()>;

    /// All records belonging to one user, in store order.
    async fn list(&self, user_id: &str) -> Result<Vec<JobRecord>>;
}

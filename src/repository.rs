//! Identifier-keyed persistence capability for User records.

use crate::error::AppError;
use crate::model::User;
use async_trait::async_trait;

/// Storage operations the service layer depends on. Implemented by the
/// PostgreSQL adapter in `store`; tests run against the in-memory adapter
/// in `test_utils`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All records, in insertion order.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Insert when `user.id` is `None`, upsert otherwise. Returns the stored
    /// row including the assigned id.
    async fn save(&self, user: User) -> Result<User, AppError>;

    /// No-op when the id does not exist.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

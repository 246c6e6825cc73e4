//! The User resource representation.

use serde::{Deserialize, Serialize};

/// A user record as stored and as sent over the wire.
///
/// `id` is assigned by the store on first save and never changes afterwards.
/// Request bodies may omit it (create) or carry one that is ignored (update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

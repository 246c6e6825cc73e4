//! In-memory repository adapter for tests.

use crate::error::AppError;
use crate::model::User;
use crate::repository::UserRepository;
use async_trait::async_trait;
use std::sync::Mutex;

/// `UserRepository` backed by a mutex-guarded `Vec`. Ids come from a
/// monotonically increasing counter, mirroring a serial column.
#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: Vec<User>,
    next_id: i64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.inner.lock().unwrap().rows.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn save(&self, mut user: User) -> Result<User, AppError> {
        let mut inner = self.inner.lock().unwrap();
        match user.id {
            None => {
                inner.next_id += 1;
                user.id = Some(inner.next_id);
                inner.rows.push(user.clone());
            }
            Some(id) => match inner.rows.iter_mut().find(|u| u.id == Some(id)) {
                Some(slot) => *slot = user.clone(),
                None => inner.rows.push(user.clone()),
            },
        }
        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.inner.lock().unwrap().rows.retain(|u| u.id != Some(id));
        Ok(())
    }
}

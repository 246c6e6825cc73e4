//! User operations: thin delegation to the repository, plus the update merge.

use crate::error::AppError;
use crate::model::User;
use crate::repository::UserRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<User>, AppError> {
        self.repo.find_all().await
    }

    /// Persists a new record; any caller-supplied id is discarded so the
    /// store assigns one.
    pub async fn create(&self, user: User) -> Result<User, AppError> {
        self.repo.save(User { id: None, ..user }).await
    }

    /// No existence check: deleting a missing id is a silent success.
    pub async fn remove(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete_by_id(id).await
    }

    /// Overwrites name, email and phone of the record at `id` and persists
    /// it. The id in `patch` is ignored.
    pub async fn update(&self, id: i64, patch: User) -> Result<User, AppError> {
        let mut existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user with id {}", id)))?;
        existing.name = patch.name;
        existing.email = patch.email;
        existing.phone = patch.phone;
        self.repo.save(existing).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn draft(name: &str, email: &str, phone: &str) -> User {
        User {
            id: None,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    #[tokio::test]
    async fn list_is_empty_before_any_create() {
        let svc = service();
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_assigns_an_id_and_keeps_fields() {
        let svc = service();
        let created = svc.create(draft("Ann", "ann@x.com", "555")).await.unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.name, "Ann");
        assert_eq!(created.email, "ann@x.com");
        assert_eq!(created.phone, "555");

        let all = svc.list_all().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn create_discards_a_caller_supplied_id() {
        let svc = service();
        let mut user = draft("Ann", "ann@x.com", "555");
        user.id = Some(42);
        let created = svc.create(user).await.unwrap();
        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found() {
        let svc = service();
        let err = svc
            .update(9999, draft("Bob", "bob@x.com", "556"))
            .await
            .unwrap_err();
        match err {
            AppError::NotFound(msg) => assert!(msg.contains("9999")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_preserves_the_id() {
        let svc = service();
        let created = svc.create(draft("Ann", "ann@x.com", "555")).await.unwrap();
        let id = created.id.unwrap();

        // The patch carries a different id; only the path id counts.
        let mut patch = draft("Bob", "bob@x.com", "556");
        patch.id = Some(id + 100);
        let updated = svc.update(id, patch).await.unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name, "Bob");
        assert_eq!(updated.email, "bob@x.com");
        assert_eq!(updated.phone, "556");
        assert_eq!(svc.list_all().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn remove_drops_the_record_from_listing() {
        let svc = service();
        let created = svc.create(draft("Ann", "ann@x.com", "555")).await.unwrap();
        svc.remove(created.id.unwrap()).await.unwrap();
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_of_missing_id_is_silent() {
        let svc = service();
        svc.remove(9999).await.unwrap();
    }
}

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, UserRepository};
use crate::domain::{User, UserId};

/// In-memory user store for tests and scaffolding.
#[derive(Default)]
pub struct MockUserRepository {
    users: RwLock<Vec<User>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn insert(&self, user: &User) -> Result<UserId, RepositoryError> {
        let id = UserId::from_raw(Uuid::new_v4().simple().to_string());
        let mut stored = user.clone();
        stored.id = Some(id.clone());
        self.users.write().await.push(stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.id.as_ref() == Some(id))
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_gmail(&self, gmail: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.gmail == gmail)
            .cloned())
    }

    async fn update_password(
        &self,
        id: &UserId,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id.as_ref() == Some(id))
            .ok_or_else(|| RepositoryError::NotFound(id.as_str().to_string()))?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }

    async fn set_profile_image(
        &self,
        id: &UserId,
        filename: &str,
    ) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id.as_ref() == Some(id))
            .ok_or_else(|| RepositoryError::NotFound(id.as_str().to_string()))?;
        user.profile_image = Some(filename.to_string());
        Ok(())
    }
}

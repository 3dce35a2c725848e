use async_trait::async_trait;

use crate::domain::{User, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: &User) -> Result<UserId, RepositoryError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    async fn find_by_gmail(&self, gmail: &str) -> Result<Option<User>, RepositoryError>;

    async fn update_password(
        &self,
        id: &UserId,
        password_hash: &str,
    ) -> Result<(), RepositoryError>;

    async fn set_profile_image(&self, id: &UserId, filename: &str)
        -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, DateTime as BsonDateTime, Document};
use mongodb::{Collection, Database};
use tracing::instrument;

use crate::application::ports::{RepositoryError, UserRepository};
use crate::domain::{User, UserId};

const USERS_COLLECTION: &str = "users";

pub struct MongoUserRepository {
    users: Collection<Document>,
}

impl MongoUserRepository {
    pub fn new(database: Database) -> Self {
        Self {
            users: database.collection(USERS_COLLECTION),
        }
    }

    fn object_id(id: &UserId) -> Result<ObjectId, RepositoryError> {
        ObjectId::parse_str(id.as_str())
            .map_err(|e| RepositoryError::QueryFailed(format!("invalid user id: {}", e)))
    }

    fn to_user(document: &Document) -> Result<User, RepositoryError> {
        let read = |field: &str| {
            document
                .get_str(field)
                .map(str::to_string)
                .map_err(|e| RepositoryError::QueryFailed(format!("field {}: {}", field, e)))
        };

        Ok(User {
            id: document
                .get_object_id("_id")
                .ok()
                .map(|oid| UserId::from_raw(oid.to_hex())),
            username: read("username")?,
            name: document.get_str("name").unwrap_or_default().to_string(),
            gmail: document.get_str("gmail").unwrap_or_default().to_string(),
            password_hash: read("password_hash")?,
            profile_image: document
                .get_str("profile_image")
                .ok()
                .map(str::to_string),
            created_at: document
                .get_datetime("created_at")
                .map(|dt| BsonDateTime::to_chrono(*dt))
                .unwrap_or_default(),
        })
    }

    async fn find_one(&self, filter: Document) -> Result<Option<User>, RepositoryError> {
        let document = self
            .users
            .find_one(filter)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        document.as_ref().map(Self::to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn insert(&self, user: &User) -> Result<UserId, RepositoryError> {
        let mut document = doc! {
            "username": &user.username,
            "name": &user.name,
            "gmail": &user.gmail,
            "password_hash": &user.password_hash,
            "created_at": BsonDateTime::from_chrono(user.created_at),
        };
        if let Some(image) = &user.profile_image {
            document.insert("profile_image", image);
        }

        let result = self
            .users
            .insert_one(document)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepositoryError::QueryFailed("missing inserted id".into()))?;

        Ok(UserId::from_raw(oid.to_hex()))
    }

    #[instrument(skip(self), fields(user_id = %id.as_str()))]
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let oid = Self::object_id(id)?;
        self.find_one(doc! { "_id": oid }).await
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        self.find_one(doc! { "username": username }).await
    }

    #[instrument(skip(self))]
    async fn find_by_gmail(&self, gmail: &str) -> Result<Option<User>, RepositoryError> {
        self.find_one(doc! { "gmail": gmail }).await
    }

    #[instrument(skip(self, password_hash), fields(user_id = %id.as_str()))]
    async fn update_password(
        &self,
        id: &UserId,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let oid = Self::object_id(id)?;
        let result = self
            .users
            .update_one(
                doc! { "_id": oid },
                doc! { "$set": { "password_hash": password_hash } },
            )
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(RepositoryError::NotFound(id.as_str().to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %id.as_str()))]
    async fn set_profile_image(
        &self,
        id: &UserId,
        filename: &str,
    ) -> Result<(), RepositoryError> {
        let oid = Self::object_id(id)?;
        let result = self
            .users
            .update_one(
                doc! { "_id": oid },
                doc! { "$set": { "profile_image": filename } },
            )
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(RepositoryError::NotFound(id.as_str().to_string()));
        }
        Ok(())
    }
}

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Identity key of a stored user, the document id rendered as a hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An account holder. Lifecycle is owned by the user repository; the rest of
/// the application only ever reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Option<UserId>,
    pub username: String,
    pub name: String,
    pub gmail: String,
    pub password_hash: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, name: String, gmail: String, password: &str) -> Self {
        Self {
            id: None,
            username,
            name,
            gmail,
            password_hash: hash_password(password),
            profile_image: None,
            created_at: Utc::now(),
        }
    }

    /// The only capability the session layer needs from a user.
    pub fn identity_key(&self) -> Option<&str> {
        self.id.as_ref().map(UserId::as_str)
    }

    pub fn verify_password(&self, candidate: &str) -> bool {
        let Some((salt, expected)) = self.password_hash.split_once('$') else {
            return false;
        };
        digest_with_salt(salt, candidate) == expected
    }
}

/// Produces `salt$hex(sha256(salt + password))` with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    let digest = digest_with_salt(&salt, password);
    format!("{}${}", salt, digest)
}

fn digest_with_salt(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

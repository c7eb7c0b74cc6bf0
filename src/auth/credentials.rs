use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::password::hash_password;

pub const DEMO_USERNAME: &str = "demo_mom";
pub const DEMO_PASSWORD: &str = "password123";

/// A registered account.
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub password_hash: String, // Argon2 PHC string
}

/// Username → account mapping shared by every session.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_user(&self, username: &str) -> anyhow::Result<Option<User>>;

    /// Inserts `user` unless the username is taken. Returns whether it was
    /// inserted; check and insert happen under one lock.
    async fn insert_if_absent(&self, user: User) -> anyhow::Result<bool>;
}

#[derive(Default)]
pub struct InMemoryCredentials {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryCredentials {
    /// Store holding only the demo account.
    pub fn seeded() -> anyhow::Result<Self> {
        let mut users = HashMap::new();
        users.insert(
            DEMO_USERNAME.to_string(),
            User {
                username: DEMO_USERNAME.to_string(),
                password_hash: hash_password(DEMO_PASSWORD)?,
            },
        );
        Ok(Self {
            users: RwLock::new(users),
        })
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentials {
    async fn find_user(&self, username: &str) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn insert_if_absent(&self, user: User) -> anyhow::Result<bool> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Ok(false);
        }
        users.insert(user.username.clone(), user);
        Ok(true)
    }
}

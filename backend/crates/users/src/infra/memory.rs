//! In-memory User Repository
//!
//! Keeps insertion order and enforces email uniqueness like the table does.
//! Used by tests and local experiments without a database.

use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{UserError, UserResult};

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn fetch_all(&self) -> UserResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> UserResult<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn create(&self, user: &User) -> UserResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> UserResult<bool> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.id != user.id && u.email == user.email) {
            return Err(UserError::EmailTaken);
        }
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &UserId) -> UserResult<bool> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != *id);
        Ok(users.len() < before)
    }
}

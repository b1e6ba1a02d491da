//! Repository Traits

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::UserResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Every user, in insertion order
    async fn fetch_all(&self) -> UserResult<Vec<User>>;

    async fn find_by_id(&self, id: &UserId) -> UserResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>>;

    async fn create(&self, user: &User) -> UserResult<()>;

    /// Persist name, email, password hash and `updated_at`.
    /// Returns `false` if the user no longer exists.
    async fn update(&self, user: &User) -> UserResult<bool>;

    /// Returns `false` if there was nothing to delete
    async fn delete(&self, id: &UserId) -> UserResult<bool>;
}

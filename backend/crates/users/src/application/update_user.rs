//! Update User Use Case
//!
//! Replaces name and email. The password is changed separately.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::parse_user_id;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{UserError, UserResult};

pub struct UpdateUserInput {
    pub name: String,
    pub email: String,
}

pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str, input: UpdateUserInput) -> UserResult<UserId> {
        let id = parse_user_id(id)?;
        let name = UserName::new(&input.name)?;
        let email = Email::new(input.email)?;

        let mut user = self.repo.find_by_id(&id).await?.ok_or(UserError::NotFound)?;

        if email != user.email {
            if let Some(owner) = self.repo.find_by_email(&email).await? {
                if owner.id != user.id {
                    return Err(UserError::EmailTaken);
                }
            }
        }

        user.rename(name, email);
        if !self.repo.update(&user).await? {
            return Err(UserError::NotFound);
        }

        tracing::info!(user_id = %user.id, "User updated");
        Ok(user.id)
    }
}

//! Change Password Use Case

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;

use crate::application::config::UsersConfig;
use crate::application::{ensure_confirmed, parse_user_id};
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};

pub struct ChangePasswordInput {
    pub password_old: String,
    pub password_new: String,
    pub password_confirm: String,
}

pub struct ChangePasswordUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> ChangePasswordUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, id: &str, input: ChangePasswordInput) -> UserResult<UserId> {
        let id = parse_user_id(id)?;
        let mut user = self.repo.find_by_id(&id).await?.ok_or(UserError::NotFound)?;

        let old = ClearTextPassword::for_verification(input.password_old);
        if !user.password_hash.verify(&old, self.config.pepper()) {
            return Err(UserError::InvalidCredentials);
        }

        ensure_confirmed(&input.password_new, &input.password_confirm)?;
        let new = ClearTextPassword::new(input.password_new)?;

        user.set_password(new.hash(self.config.pepper())?);
        if !self.repo.update(&user).await? {
            return Err(UserError::NotFound);
        }

        tracing::info!(user_id = %user.id, "Password changed");
        Ok(user.id)
    }
}

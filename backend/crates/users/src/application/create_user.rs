//! Create User Use Case

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::UsersConfig;
use crate::application::ensure_confirmed;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{UserError, UserResult};

pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug)]
pub struct CreateUserOutput {
    pub name: String,
    pub email: String,
}

pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: CreateUserInput) -> UserResult<CreateUserOutput> {
        let name = UserName::new(&input.name)?;
        let email = Email::new(input.email)?;
        ensure_confirmed(&input.password, &input.password_confirm)?;
        let password = ClearTextPassword::new(input.password)?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(UserError::EmailTaken);
        }

        let user = User::new(name, email, password.hash(self.config.pepper())?);
        self.repo.create(&user).await?;

        tracing::info!(user_id = %user.id, "User created");

        Ok(CreateUserOutput {
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
        })
    }
}

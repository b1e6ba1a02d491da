//! Delete User Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::parse_user_id;
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};

pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> UserResult<UserId> {
        let id = parse_user_id(id)?;
        if !self.repo.delete(&id).await? {
            return Err(UserError::NotFound);
        }

        tracing::info!(user_id = %id, "User deleted");
        Ok(id)
    }
}

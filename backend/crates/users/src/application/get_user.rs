//! Get User Use Case

use std::sync::Arc;

use crate::application::parse_user_id;
use crate::domain::entity::user::UserView;
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};

pub struct GetUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> GetUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> UserResult<UserView> {
        let id = parse_user_id(id)?;
        self.repo
            .find_by_id(&id)
            .await?
            .map(UserView::from)
            .ok_or(UserError::NotFound)
    }
}

//! List Users Use Case

use std::sync::Arc;

use platform::query::{ListQuery, PageResult, QueryRequest, query_page};

use crate::domain::entity::user::{USER_QUERY_PROFILE, UserView};
use crate::domain::repository::UserRepository;
use crate::error::UserResult;

pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, params: &ListQuery) -> UserResult<PageResult<UserView>> {
        let request = QueryRequest::from_params(params, &USER_QUERY_PROFILE);
        let users = self.repo.fetch_all().await?;
        Ok(query_page(users, &request, &USER_QUERY_PROFILE, UserView::from))
    }
}

//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use std::sync::Arc;
use tracing::Instrument;

use kernel::caller::AuthenticatedUser;
use platform::query::{ListQuery, PageResult};

use crate::application::config::UsersConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, CreateUserInput, CreateUserUseCase,
    DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserInput, UpdateUserUseCase,
};
use crate::domain::entity::user::UserView;
use crate::domain::repository::UserRepository;
use crate::error::UserResult;
use crate::presentation::dto::{
    ChangePasswordRequest, CreateUserRequest, CreateUserResponse, UpdateUserRequest,
    UserIdResponse,
};

/// Shared state for user handlers
pub struct UsersAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<UsersConfig>,
}

impl<R> Clone for UsersAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

/// GET /users
pub async fn list_users<R>(
    State(state): State<UsersAppState<R>>,
    Query(params): Query<ListQuery>,
) -> UserResult<Json<PageResult<UserView>>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let page = ListUsersUseCase::new(state.repo.clone())
        .execute(&params)
        .await?;
    Ok(Json(page))
}

/// GET /users/{id}
pub async fn get_user<R>(
    State(state): State<UsersAppState<R>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserView>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user = GetUserUseCase::new(state.repo.clone()).execute(&id).await?;
    Ok(Json(user))
}

/// POST /users
pub async fn create_user<R>(
    State(state): State<UsersAppState<R>>,
    caller: Option<Extension<AuthenticatedUser>>,
    Json(req): Json<CreateUserRequest>,
) -> UserResult<Json<CreateUserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = CreateUserUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(CreateUserInput {
            name: req.name,
            email: req.email,
            password: req.password,
            password_confirm: req.password_confirm,
        })
        .instrument(caller_span(caller))
        .await?;

    Ok(Json(CreateUserResponse {
        name: output.name,
        email: output.email,
    }))
}

/// PUT /users/{id}
pub async fn update_user<R>(
    State(state): State<UsersAppState<R>>,
    caller: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> UserResult<Json<UserIdResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let id = UpdateUserUseCase::new(state.repo.clone())
        .execute(
            &id,
            UpdateUserInput {
                name: req.name,
                email: req.email,
            },
        )
        .instrument(caller_span(caller))
        .await?;

    Ok(Json(UserIdResponse { id: id.to_string() }))
}

/// DELETE /users/{id}
pub async fn delete_user<R>(
    State(state): State<UsersAppState<R>>,
    caller: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserIdResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let id = DeleteUserUseCase::new(state.repo.clone())
        .execute(&id)
        .instrument(caller_span(caller))
        .await?;
    Ok(Json(UserIdResponse { id: id.to_string() }))
}

/// PATCH /users/{id}/change-password
pub async fn change_password<R>(
    State(state): State<UsersAppState<R>>,
    caller: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
    Json(req): Json<ChangePasswordRequest>,
) -> UserResult<Json<UserIdResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = ChangePasswordUseCase::new(state.repo.clone(), state.config.clone());

    let id = use_case
        .execute(
            &id,
            ChangePasswordInput {
                password_old: req.password_old,
                password_new: req.password_new,
                password_confirm: req.password_confirm,
            },
        )
        .instrument(caller_span(caller))
        .await?;

    Ok(Json(UserIdResponse { id: id.to_string() }))
}

/// Span that tags the use case's logs with the caller
fn caller_span(caller: Option<Extension<AuthenticatedUser>>) -> tracing::Span {
    let caller = caller.map(|Extension(user)| user);
    tracing::info_span!("caller", actor = %AuthenticatedUser::actor(caller.as_ref()))
}

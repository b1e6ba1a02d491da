//! Users Router

use axum::{
    Router,
    routing::{get, patch},
};
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, UsersAppState};

/// Create the Users router with PostgreSQL repository
pub fn users_router(repo: PgUserRepository, config: UsersConfig) -> Router {
    users_router_generic(repo, config)
}

/// Create a generic Users router for any repository implementation
pub fn users_router_generic<R>(repo: R, config: UsersConfig) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = UsersAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_users::<R>).post(handlers::create_user::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_user::<R>)
                .put(handlers::update_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .route(
            "/{id}/change-password",
            patch(handlers::change_password::<R>),
        )
        .with_state(state)
}

//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;
mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::PgAuthRepository;
use auth::middleware::BearerAuthState;
use orders::PgOrderRepository;
use platform::clock::{Clock, SystemClock};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users::PgUserRepository;

use crate::app::{Routers, build_app, cors_layer};
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,users=info,orders=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let bearer = BearerAuthState::new(Arc::new(config.auth.clone()), clock);

    let app = build_app(
        Routers {
            auth: auth::auth_router(PgAuthRepository::new(pool.clone()), config.auth),
            users: users::users_router(PgUserRepository::new(pool.clone()), config.users),
            orders: orders::orders_router(PgOrderRepository::new(pool)),
        },
        bearer,
        cors_layer(&config.frontend_origins),
    );

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

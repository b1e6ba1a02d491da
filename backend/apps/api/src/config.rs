//! Process Configuration
//!
//! Read once at startup, after `.env` has been loaded.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;
use users::UsersConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub users: UsersConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be host:port")?;

        let frontend_origins = parse_origins(
            &env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        let password_pepper = env::var("PASSWORD_PEPPER")
            .ok()
            .filter(|p| !p.is_empty())
            .map(String::into_bytes);

        let mut auth = if cfg!(debug_assertions) {
            match env::var("AUTH_TOKEN_SECRET") {
                Ok(secret) => AuthConfig {
                    token_secret: decode_secret(&secret)?,
                    ..AuthConfig::default()
                },
                Err(_) => {
                    tracing::warn!("AUTH_TOKEN_SECRET not set, using a random development secret");
                    AuthConfig::development()
                }
            }
        } else {
            // In production, load secret from environment
            let secret = env::var("AUTH_TOKEN_SECRET")
                .context("AUTH_TOKEN_SECRET must be set in production")?;
            AuthConfig {
                token_secret: decode_secret(&secret)?,
                ..AuthConfig::default()
            }
        };
        auth.password_pepper = password_pepper.clone();

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origins,
            auth,
            users: UsersConfig { password_pepper },
        })
    }
}

/// Standard base64 of exactly 32 bytes
fn decode_secret(encoded: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .context("AUTH_TOKEN_SECRET must be base64")?;
    let Ok(secret) = <[u8; 32]>::try_from(bytes.as_slice()) else {
        bail!("AUTH_TOKEN_SECRET must decode to 32 bytes, got {}", bytes.len());
    };
    Ok(secret)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

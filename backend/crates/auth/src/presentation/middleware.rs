//! Auth Middleware
//!
//! Bearer-token check for protected routes.
//!
//! ```ignore
//! let bearer = BearerAuthState::new(config.clone(), Arc::new(SystemClock));
//! let protected = Router::new()
//!     .nest("/orders", orders_router(pool))
//!     .route_layer(axum::middleware::from_fn_with_state(bearer, require_bearer));
//! ```

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

pub use kernel::caller::AuthenticatedUser;
use platform::clock::Clock;

use crate::application::config::AuthConfig;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

/// Middleware state
#[derive(Clone)]
pub struct BearerAuthState {
    pub config: Arc<AuthConfig>,
    pub clock: Arc<dyn Clock>,
}

impl BearerAuthState {
    pub fn new(config: Arc<AuthConfig>, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }
}

/// Middleware that requires a valid bearer token
pub async fn require_bearer(
    State(state): State<BearerAuthState>,
    mut req: Request<Body>,
    next: Next,
) -> AuthResult<Response> {
    let token = bearer_token(req.headers()).ok_or(AuthError::TokenInvalid)?;
    let session = SessionToken::verify(token, &state.config.token_secret, state.clock.now())?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: session.user_id,
    });

    Ok(next.run(req).await)
}

/// `Authorization: Bearer <token>`; the scheme is case-insensitive
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::extract::Extension;
    use axum::http::StatusCode;
    use axum::routing::get;
    use chrono::TimeDelta;
    use kernel::id::UserId;
    use platform::clock::ManualClock;
    use tower::ServiceExt;

    fn app(config: Arc<AuthConfig>, clock: Arc<ManualClock>) -> Router {
        let state = BearerAuthState::new(config, clock);
        Router::new()
            .route(
                "/me",
                get(|Extension(user): Extension<AuthenticatedUser>| async move {
                    user.user_id.to_string()
                }),
            )
            .route_layer(axum::middleware::from_fn_with_state(state, require_bearer))
    }

    fn get_me(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/me");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_passes_user_through() {
        let config = Arc::new(AuthConfig::with_random_secret());
        let clock = Arc::new(ManualClock::starting_now());
        let user_id = UserId::new();
        let token = SessionToken::issue(user_id, clock.now(), config.token_lifetime())
            .encode(&config.token_secret);

        let response = app(config, clock)
            .oneshot(get_me(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, user_id.to_string());
    }

    #[tokio::test]
    async fn test_rejections() {
        let config = Arc::new(AuthConfig::with_random_secret());
        let clock = Arc::new(ManualClock::starting_now());
        let token = SessionToken::issue(UserId::new(), clock.now(), TimeDelta::hours(1))
            .encode(&config.token_secret);
        let forged = SessionToken::issue(UserId::new(), clock.now(), TimeDelta::hours(1))
            .encode(&[0u8; 32]);

        let cases = [
            None,
            Some("Bearer".to_string()),
            Some("Bearer ".to_string()),
            Some(format!("Basic {token}")),
            Some("Bearer not-a-token".to_string()),
            Some(format!("Bearer {forged}")),
        ];
        for case in cases {
            let response = app(config.clone(), clock.clone())
                .oneshot(get_me(case.as_deref()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{case:?}");
        }

        // expired
        clock.advance(TimeDelta::hours(2));
        let response = app(config, clock)
            .oneshot(get_me(Some(&format!("bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "BEARER abc.def".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc.def"));
    }
}

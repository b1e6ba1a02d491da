//! Router Composition
//!
//! `/authentication` is public. `/users` and `/orders` sit behind the
//! bearer-token check.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::middleware::from_fn_with_state;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use auth::middleware::{BearerAuthState, require_bearer};
use kernel::error::app_error::AppError;

pub struct Routers {
    pub auth: Router,
    pub users: Router,
    pub orders: Router,
}

pub fn build_app(routers: Routers, bearer: BearerAuthState, cors: CorsLayer) -> Router {
    let protected = Router::new()
        .nest("/users", routers.users)
        .nest("/orders", routers.orders)
        .route_layer(from_fn_with_state(bearer, require_bearer));

    Router::new()
        .nest("/authentication", routers.auth)
        .merge(protected)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}

pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use auth::domain::repository::{CredentialVerifier, VerifiedUser};
    use auth::domain::value_object::identity::Identity;
    use auth::{AuthConfig, AuthResult, InMemoryLoginAttemptStore, auth_router_generic};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use kernel::id::UserId;
    use orders::{InMemoryOrderRepository, orders_router_generic};
    use platform::clock::{Clock, SystemClock};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use users::{InMemoryUserRepository, UsersConfig, users_router_generic};

    struct OneUser(UserId);

    impl CredentialVerifier for OneUser {
        async fn verify(
            &self,
            identity: &Identity,
            secret: &str,
        ) -> AuthResult<Option<VerifiedUser>> {
            let ok = identity.as_str() == "admin@example.com" && secret == "Correct#Horse9";
            Ok(ok.then(|| VerifiedUser {
                user_id: self.0,
                email: "admin@example.com".to_string(),
                name: "Admin".to_string(),
            }))
        }
    }

    fn app() -> Router {
        let config = AuthConfig::with_random_secret();
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let bearer = BearerAuthState::new(Arc::new(config.clone()), clock.clone());

        build_app(
            Routers {
                auth: auth_router_generic(
                    InMemoryLoginAttemptStore::new(),
                    OneUser(UserId::new()),
                    clock,
                    config,
                ),
                users: users_router_generic(InMemoryUserRepository::new(), UsersConfig::default()),
                orders: orders_router_generic(InMemoryOrderRepository::new()),
            },
            bearer,
            cors_layer(&["http://localhost:3000".to_string()]),
        )
    }

    async fn call(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_resources_require_login() {
        let app = app();

        for uri in ["/users", "/orders"] {
            let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let (status, _) = call(&app, req).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        }

        let login = Request::builder()
            .method("POST")
            .uri("/authentication/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "email": "admin@example.com", "password": "Correct#Horse9" }).to_string(),
            ))
            .unwrap();
        let (status, body) = call(&app, login).await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap().to_string();

        for uri in ["/users", "/orders"] {
            let req = Request::builder()
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap();
            let (status, body) = call(&app, req).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body["count"], 0);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_problem_json() {
        let req = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        let (status, body) = call(&app(), req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
    }
}

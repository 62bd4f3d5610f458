//! Basic authentication middleware with a pluggable credential validator.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::headers::{authorization::Basic, Authorization, HeaderMapExt};

use super::config::AuthConfig;
use crate::errors::{ErrorCode, ErrorResponse};

/// Capability to validate a username/password pair.
///
/// The middleware only depends on this trait, so a real credential store
/// (database, LDAP, ...) can replace the static single-account check.
pub trait CredentialValidator: Send + Sync {
    fn validate(&self, username: &str, password: &str) -> bool;
}

/// Validator holding one fixed account.
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl From<&AuthConfig> for StaticCredentials {
    fn from(config: &AuthConfig) -> Self {
        Self::new(config.username.clone(), config.password.clone())
    }
}

impl CredentialValidator for StaticCredentials {
    fn validate(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Shared state for [`basic_auth_middleware`].
#[derive(Clone)]
pub struct BasicAuth {
    validator: Arc<dyn CredentialValidator>,
    realm: String,
}

impl BasicAuth {
    pub fn new(validator: impl CredentialValidator + 'static, realm: impl Into<String>) -> Self {
        Self {
            validator: Arc::new(validator),
            realm: realm.into(),
        }
    }

    /// Build from config with the shipped static single-account validator.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(StaticCredentials::from(config), config.realm.clone())
    }

    /// 401 response carrying the `WWW-Authenticate` challenge.
    ///
    /// The realm is the request's Host, falling back to the configured realm.
    fn challenge(&self, headers: &HeaderMap, message: &str) -> Response {
        let realm = headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(&self.realm);

        let body = Json(ErrorResponse {
            code: ErrorCode::Unauthorized.code(),
            error: "Unauthorized".to_string(),
            message: message.to_string(),
            details: None,
        });

        (
            StatusCode::UNAUTHORIZED,
            [(
                header::WWW_AUTHENTICATE,
                format!("Basic realm=\"{}\"", realm),
            )],
            body,
        )
            .into_response()
    }
}

/// Basic authentication middleware.
///
/// Parses the `Authorization: Basic <base64>` header and checks the decoded
/// credentials through the configured [`CredentialValidator`]. On any
/// failure (missing header, malformed value, rejected credentials) the
/// response is a 401 with a `WWW-Authenticate: Basic realm="<host>"`
/// challenge.
///
/// # Example
///
/// ```ignore
/// use axum::{middleware, routing::post, Router};
/// use axum_helpers::auth::{basic_auth_middleware, BasicAuth, StaticCredentials};
///
/// let auth = BasicAuth::new(StaticCredentials::new("user", "pass"), "my-api");
///
/// let protected = Router::new()
///     .route("/products", post(create_product))
///     .route_layer(middleware::from_fn_with_state(auth, basic_auth_middleware));
/// ```
pub async fn basic_auth_middleware(
    State(auth): State<BasicAuth>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    if !headers.contains_key(header::AUTHORIZATION) {
        tracing::debug!("Missing Authorization header");
        return auth.challenge(&headers, "Missing Authorization Header");
    }

    // typed_get handles scheme matching and base64 decoding
    let Some(credentials) = headers.typed_get::<Authorization<Basic>>() else {
        tracing::debug!("Authorization header is not valid Basic");
        return auth.challenge(&headers, "Invalid Authorization Header format");
    };

    let basic = credentials.0;
    if !auth.validator.validate(basic.username(), basic.password()) {
        tracing::debug!(username = basic.username(), "Basic credentials rejected");
        return auth.challenge(&headers, "Invalid Username or Password");
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use axum::routing::post;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    const GOOD: &str = "Basic dGVzdF91c2VyOnRlc3RfcGFzc3dvcmQ="; // test_user:test_password
    const BAD: &str = "Basic dGVzdF91c2VyOndyb25n"; // test_user:wrong

    fn app() -> Router {
        let auth = BasicAuth::new(
            StaticCredentials::new("test_user", "test_password"),
            "test-realm",
        );
        Router::new()
            .route("/protected", post(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(auth, basic_auth_middleware))
    }

    fn request(auth_header: Option<&str>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().method("POST").uri("/protected");
        if let Some(value) = auth_header {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_credentials_pass_through() {
        let response = app().oneshot(request(Some(GOOD))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_header_is_challenged() {
        let response = app().oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let challenge = response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert_eq!(challenge, "Basic realm=\"test-realm\"");
    }

    #[tokio::test]
    async fn test_wrong_password_is_challenged() {
        let response = app().oneshot(request(Some(BAD))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    }

    #[tokio::test]
    async fn test_non_basic_scheme_is_challenged() {
        let response = app()
            .oneshot(request(Some("Bearer some-token")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_challenge_realm_uses_host_header() {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/protected")
            .header(header::HOST, "shop.example.com")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(req).await.unwrap();
        let challenge = response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert_eq!(challenge, "Basic realm=\"shop.example.com\"");
    }
}

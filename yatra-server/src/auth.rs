//! Bearer-token access control for mutations and the push channel.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

use crate::config::AuthConfig;
use crate::errors::AppError;
use crate::state::AppState;

/// Middleware gating a route behind the configured API token.
///
/// Authorization failures are reported before any validation or store
/// access happens further down the stack.
pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&request)?;
    if !token_matches(&state.config.auth, &token) {
        return Err(AppError::unauthorized("invalid API token"));
    }
    Ok(next.run(request).await)
}

/// Pull the bearer token out of a request, or fail with 401.
pub fn extract_bearer_token(request: &Request) -> Result<String, AppError> {
    bearer_from_headers(request.headers())
        .ok_or_else(|| AppError::unauthorized("missing bearer token"))
}

/// Read `Authorization: Bearer <token>` from a header map.
pub fn bearer_from_headers(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())?;

    auth_header
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

/// Compare a presented token against the configured one.
///
/// Both sides are hashed first so the comparison shape does not depend on
/// where the presented token diverges.
pub fn token_matches(auth: &AuthConfig, presented: &str) -> bool {
    Sha256::digest(auth.api_token.as_bytes()) == Sha256::digest(presented.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn auth_config(token: &str) -> AuthConfig {
        AuthConfig {
            api_token: token.into(),
            protect_reads: false,
        }
    }

    #[test]
    fn matches_exact_token_only() {
        let auth = auth_config("secret-token");
        assert!(token_matches(&auth, "secret-token"));
        assert!(!token_matches(&auth, "secret-token2"));
        assert!(!token_matches(&auth, ""));
    }

    #[test]
    fn extracts_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer secret-token"),
        );
        assert_eq!(bearer_from_headers(&headers).as_deref(), Some("secret-token"));
    }

    #[test]
    fn rejects_missing_or_non_bearer_headers() {
        assert_eq!(bearer_from_headers(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(bearer_from_headers(&headers), None);
    }
}

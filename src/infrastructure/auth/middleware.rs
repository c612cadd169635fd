use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{
    domain::auth::{TokenService, TokenType},
    error::AppError,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Caller identity injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

/// Bearer-token middleware for protected resources.
///
/// Only live access tokens are accepted; a refresh token presented here is
/// refused like any other bad credential.
pub async fn auth_middleware(
    State(token_service): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request).ok_or_else(|| {
        tracing::debug!("Missing or malformed authorization header");
        AppError::Forbidden
    })?;

    let claims = token_service
        .validate(token, TokenType::Access)
        .map_err(|e| {
            tracing::warn!(reason = %e, "Rejected bearer token");
            AppError::Forbidden
        })?;

    request.extensions_mut().insert(AuthUser {
        username: claims.sub,
    });

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

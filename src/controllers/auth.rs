use axum::{
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue},
    Json,
};
use std::{fmt::Display, sync::Arc};

use crate::{
    domain::auth::{AuthResponse, AuthService, LoginRequest, RefreshRequest},
    error::{AppError, AppResult},
};

pub const X_ACCESS_TOKEN: HeaderName = HeaderName::from_static("x-access-token");
pub const X_REFRESH_TOKEN: HeaderName = HeaderName::from_static("x-refresh-token");

pub struct AuthController {
    auth_service: Arc<AuthService>,
}

impl AuthController {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    /// POST /auth/login - Exchange credentials for an access and a refresh token
    pub async fn login(
        State(controller): State<Arc<AuthController>>,
        Json(request): Json<LoginRequest>,
    ) -> AppResult<(HeaderMap, Json<AuthResponse>)> {
        request.validate()?;

        let pair = controller
            .auth_service
            .login(&request.username, &request.password)
            .await
            .map_err(|e| reject_login(&request.username, e))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            X_ACCESS_TOKEN,
            HeaderValue::from_str(&pair.access_token)
                .map_err(|e| reject_login(&request.username, e))?,
        );
        headers.insert(
            X_REFRESH_TOKEN,
            HeaderValue::from_str(&pair.refresh_token)
                .map_err(|e| reject_login(&request.username, e))?,
        );

        Ok((headers, Json(AuthResponse::new("login ok"))))
    }

    /// POST /auth/refresh - Exchange a refresh token for a new access token
    pub async fn refresh(
        State(controller): State<Arc<AuthController>>,
        Json(request): Json<RefreshRequest>,
    ) -> AppResult<(HeaderMap, Json<AuthResponse>)> {
        request.validate()?;

        let access_token = controller
            .auth_service
            .refresh(&request.refresh_token)
            .await
            .map_err(reject_refresh)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            X_ACCESS_TOKEN,
            HeaderValue::from_str(&access_token).map_err(reject_refresh)?,
        );

        Ok((headers, Json(AuthResponse::new("refreshed"))))
    }
}

/// Log the real reason, hand back the generic one
fn reject_login(username: &str, reason: impl Display) -> AppError {
    tracing::warn!(username = %username, reason = %reason, "Login rejected");
    AppError::InvalidCredentials
}

fn reject_refresh(reason: impl Display) -> AppError {
    tracing::warn!(reason = %reason, "Refresh rejected");
    AppError::InvalidRefreshToken
}

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Login request. Missing fields deserialize as blank and fail validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_non_blank(&self.username, "Username is required")?;
        require_non_blank(&self.password, "Password is required")
    }
}

/// Refresh token request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh_token: String,
}

impl RefreshRequest {
    pub fn validate(&self) -> AppResult<()> {
        require_non_blank(&self.refresh_token, "Refresh token is required")
    }
}

/// Body of every auth response. Tokens travel in headers, never here.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub message: String,
}

impl AuthResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

fn require_non_blank(value: &str, message: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(message.to_string()));
    }
    Ok(())
}

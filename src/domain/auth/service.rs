use super::{AuthServiceError, TokenPair, TokenService, TokenType};
use crate::domain::user::UserCredentials;
use crate::infrastructure::repositories::CredentialStore;
use std::sync::Arc;

const DECOY_PASSWORD: &str = "decoy-password-never-accepted";

pub struct AuthService {
    credential_store: Arc<dyn CredentialStore>,
    token_service: Arc<TokenService>,
    // Checked in place of a missing account so unknown users cost a full hash
    decoy: UserCredentials,
}

impl AuthService {
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        token_service: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> anyhow::Result<Self> {
        let decoy = UserCredentials::hashed("", DECOY_PASSWORD, bcrypt_cost)?;

        Ok(Self {
            credential_store,
            token_service,
            decoy,
        })
    }

    /// Check credentials and issue an access/refresh token pair.
    ///
    /// Unknown users and wrong passwords both yield `CredentialMismatch`.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenPair, AuthServiceError> {
        let found = self
            .credential_store
            .find_by_username(username)
            .await
            .map_err(|e| AuthServiceError::Dependency(e.to_string()))?;

        let known = found.is_some();
        let credentials = found.unwrap_or_else(|| self.decoy.clone());

        // bcrypt is CPU-bound, keep it off the async workers
        let password = password.to_owned();
        let (credentials, matched) = tokio::task::spawn_blocking(move || {
            let matched = credentials.verify_password(&password);
            (credentials, matched)
        })
        .await
        .map_err(|e| AuthServiceError::Dependency(e.to_string()))?;

        if !(known && matched) {
            return Err(AuthServiceError::CredentialMismatch);
        }

        let pair = self.token_service.issue_token_pair(&credentials.username)?;
        tracing::info!(username = %credentials.username, "Issued token pair");

        Ok(pair)
    }

    /// Exchange a live refresh token for a new access token for the same subject
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AuthServiceError> {
        let claims = self.token_service.validate(refresh_token, TokenType::Refresh)?;

        let access_token = self.token_service.issue_access_token(&claims.sub)?;
        tracing::info!(username = %claims.sub, "Refreshed access token");

        Ok(access_token)
    }
}

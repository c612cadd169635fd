use super::jwt::{TokenError, TokenType};

/// Why an authentication step was refused.
///
/// These distinctions are for logs only. The HTTP layer collapses every
/// variant into one of two generic 401 responses.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("credential mismatch")]
    CredentialMismatch,
    #[error("token malformed: {0}")]
    TokenMalformed(String),
    #[error("token signature invalid")]
    TokenSignatureInvalid,
    #[error("token expired")]
    TokenExpired,
    #[error("expected {expected} token, got {actual}")]
    TokenTypeMismatch {
        expected: TokenType,
        actual: TokenType,
    },
    #[error("dependency error: {0}")]
    Dependency(String),
}

impl From<TokenError> for AuthServiceError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Malformed(msg) => AuthServiceError::TokenMalformed(msg),
            TokenError::SignatureInvalid => AuthServiceError::TokenSignatureInvalid,
            TokenError::Signing(msg) => AuthServiceError::Dependency(msg),
        }
    }
}

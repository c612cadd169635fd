use super::error::AuthServiceError;
use super::jwt::{Claims, TokenCodec, TokenError, TokenType};
use chrono::{Duration, Utc};

/// Lifetimes stamped into freshly minted tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPolicy {
    pub access_lifetime: Duration,
    pub refresh_lifetime: Duration,
}

impl TokenPolicy {
    /// `None` when either lifetime does not fit in a `Duration`
    pub fn new(access_minutes: i64, refresh_days: i64) -> Option<Self> {
        Some(Self {
            access_lifetime: Duration::try_minutes(access_minutes)?,
            refresh_lifetime: Duration::try_days(refresh_days)?,
        })
    }
}

/// An access token and a refresh token issued together.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct TokenService {
    codec: TokenCodec,
    policy: TokenPolicy,
}

impl TokenService {
    pub fn new(codec: TokenCodec, policy: TokenPolicy) -> Self {
        Self { codec, policy }
    }

    pub fn issue_access_token(&self, subject: &str) -> Result<String, TokenError> {
        self.codec
            .mint(subject, TokenType::Access, self.policy.access_lifetime)
    }

    pub fn issue_refresh_token(&self, subject: &str) -> Result<String, TokenError> {
        self.codec
            .mint(subject, TokenType::Refresh, self.policy.refresh_lifetime)
    }

    /// Issue both tokens, or neither if either fails to sign
    pub fn issue_token_pair(&self, subject: &str) -> Result<TokenPair, TokenError> {
        let access_token = self.issue_access_token(subject)?;
        let refresh_token = self.issue_refresh_token(subject)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Verify signature, expiry and type in that order.
    pub fn validate(
        &self,
        token: &str,
        expected: TokenType,
    ) -> Result<Claims, AuthServiceError> {
        let claims = self.codec.verify_and_decode(token)?;

        if !claims.is_live_at(Utc::now()) {
            return Err(AuthServiceError::TokenExpired);
        }

        if claims.token_type != expected {
            return Err(AuthServiceError::TokenTypeMismatch {
                expected,
                actual: claims.token_type,
            });
        }

        Ok(claims)
    }

    /// Signature verifies and the token has not expired. Type is not checked.
    pub fn is_valid(&self, token: &str) -> bool {
        self.codec
            .verify_and_decode(token)
            .map(|claims| claims.is_live_at(Utc::now()))
            .unwrap_or(false)
    }

    /// Signature verifies and the type claim matches. Expiry is not checked.
    pub fn is_of_type(&self, token: &str, expected: TokenType) -> bool {
        self.codec
            .verify_and_decode(token)
            .map(|claims| claims.token_type == expected)
            .unwrap_or(false)
    }

    /// Subject of a token already known to be valid. Decode failures propagate.
    pub fn subject_of(&self, token: &str) -> Result<String, TokenError> {
        self.codec.verify_and_decode(token).map(|claims| claims.sub)
    }
}

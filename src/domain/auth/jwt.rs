use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::fmt;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Discriminates what a token may be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Access => write!(f, "access"),
            TokenType::Refresh => write!(f, "refresh"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Username
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub iat: i64, // Issued at
    pub exp: i64, // Expiration time
}

impl Claims {
    /// True while `now` is strictly before the expiry instant.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() < self.exp
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("malformed token: {0}")]
    Malformed(String),
    #[error("token signature does not verify")]
    SignatureInvalid,
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Signs and verifies compact HS256 tokens with a single shared secret.
///
/// Verification does not look at `exp`. Expiry is checked by
/// [`TokenService`](super::TokenService).
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Mint a token issued now that expires after `lifetime`
    pub fn mint(
        &self,
        subject: &str,
        token_type: TokenType,
        lifetime: Duration,
    ) -> Result<String, TokenError> {
        self.mint_at(subject, token_type, Utc::now(), lifetime)
    }

    /// Mint a token with an explicit issue instant. A negative lifetime yields
    /// a token that is already expired.
    pub fn mint_at(
        &self,
        subject: &str,
        token_type: TokenType,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Result<String, TokenError> {
        let expires_at = issued_at
            .checked_add_signed(lifetime)
            .ok_or_else(|| TokenError::Signing(format!("lifetime {} out of range", lifetime)))?;

        let claims = Claims {
            sub: subject.to_string(),
            token_type,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Check the signature and return the embedded claims, expired or not.
    pub fn verify_and_decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::SignatureInvalid
                }
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}

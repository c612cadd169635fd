use crate::domain::auth::TokenPolicy;
use serde::Deserialize;
use std::env;

/// HS256 needs at least 256 bits of key material
pub const MIN_SECRET_BYTES: usize = 32;

/// Upper bound for either token lifetime. Keeps `now + lifetime` well inside
/// the range chrono can represent.
pub const MAX_LIFETIME_DAYS: i64 = 36_500;

const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_access_minutes: i64,
    pub jwt_refresh_days: i64,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Credential store
    pub auth_users: Vec<SeedAccount>,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Account loaded into the in-memory credential store at startup
#[derive(Clone, Deserialize, PartialEq)]
pub struct SeedAccount {
    pub username: String,
    pub password: String,
}

impl SeedAccount {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl std::fmt::Debug for SeedAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedAccount")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_access_minutes: env::var("JWT_ACCESS_MINUTES")
                .unwrap_or_else(|_| "15".to_string())
                .parse()?,
            jwt_refresh_days: env::var("JWT_REFRESH_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            auth_users: parse_accounts(
                &env::var("AUTH_USERS").unwrap_or_else(|_| "user:password".to_string()),
            )?,
            bcrypt_cost: env::var("BCRYPT_COST")
                .unwrap_or_else(|_| DEFAULT_BCRYPT_COST.to_string())
                .parse()?,
        };

        config.validate()?;

        Ok(config)
    }

    /// Reject settings the token layer cannot work with
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(format!("JWT_SECRET must be at least {} bytes", MIN_SECRET_BYTES).into());
        }
        if self.jwt_access_minutes <= 0 {
            return Err("JWT_ACCESS_MINUTES must be positive".into());
        }
        if self.jwt_refresh_days <= 0 {
            return Err("JWT_REFRESH_DAYS must be positive".into());
        }
        if self.jwt_access_minutes > MAX_LIFETIME_DAYS * 24 * 60 {
            return Err(format!(
                "JWT_ACCESS_MINUTES must not exceed {} days",
                MAX_LIFETIME_DAYS
            )
            .into());
        }
        if self.jwt_refresh_days > MAX_LIFETIME_DAYS {
            return Err(format!("JWT_REFRESH_DAYS must not exceed {}", MAX_LIFETIME_DAYS).into());
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err("BCRYPT_COST must be between 4 and 31".into());
        }
        Ok(())
    }

    pub fn token_policy(&self) -> Result<TokenPolicy, Box<dyn std::error::Error>> {
        TokenPolicy::new(self.jwt_access_minutes, self.jwt_refresh_days)
            .ok_or_else(|| "token lifetimes are out of range".into())
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

/// Parse `name:password,name2:password2`. The password may itself contain ':'.
pub fn parse_accounts(raw: &str) -> Result<Vec<SeedAccount>, Box<dyn std::error::Error>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<SeedAccount, Box<dyn std::error::Error>> {
            match entry.split_once(':') {
                Some((username, password)) if !username.is_empty() && !password.is_empty() => {
                    Ok(SeedAccount::new(username, password))
                }
                // Only echo the username part; the rest may be a password
                _ => Err(format!(
                    "AUTH_USERS entry '{}' is not username:password",
                    entry.split(':').next().unwrap_or_default()
                )
                .into()),
            }
        })
        .collect()
}

use std::sync::Arc;
use tokengate_backend::controllers::auth::AuthController;
use tokengate_backend::domain::auth::{AuthService, TokenCodec, TokenService};
use tokengate_backend::infrastructure::config::{Config, LogFormat};
use tokengate_backend::infrastructure::http::start_http_server;
use tokengate_backend::infrastructure::repositories::{CredentialStore, InMemoryUserRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        development = config.is_development(),
        "Starting TokenGate Backend on {}:{}",
        config.host,
        config.port
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Credential store
    let credential_store: Arc<dyn CredentialStore> = Arc::new(
        InMemoryUserRepository::from_accounts(&config.auth_users, config.bcrypt_cost)?,
    );
    tracing::info!(accounts = config.auth_users.len(), "Credential store ready");

    // 2. Token layer
    let token_service = Arc::new(TokenService::new(
        TokenCodec::new(config.jwt_secret.as_bytes()),
        config.token_policy()?,
    ));
    tracing::info!(
        access_minutes = config.jwt_access_minutes,
        refresh_days = config.jwt_refresh_days,
        "Token service ready"
    );

    // 3. Services and controllers
    let auth_service = Arc::new(AuthService::new(
        credential_store,
        token_service.clone(),
        config.bcrypt_cost,
    )?);
    let auth_controller = Arc::new(AuthController::new(auth_service));

    start_http_server(config, token_service, auth_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tokengate_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tokengate_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

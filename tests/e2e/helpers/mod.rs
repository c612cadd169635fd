use chrono::Duration;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokengate_backend::{
    controllers::auth::AuthController,
    domain::auth::{AuthService, TokenCodec, TokenService, TokenType},
    infrastructure::{
        config::{Config, Environment, LogFormat, SeedAccount},
        http::create_router,
        repositories::{CredentialStore, InMemoryUserRepository},
    },
};
use tokio::net::TcpListener;


use api_client::TestClient;

pub const TEST_USERNAME: &str = "user";
pub const TEST_PASSWORD: &str = "password";

pub struct TestContext {
    pub client: TestClient,
    pub config: Config,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let config = Config {
                host: "127.0.0.1".to_string(),
                port: 0, // Will be assigned by the OS
                jwt_secret: "testSecretKey123456789012345678901234567890".to_string(),
                jwt_access_minutes: 15,
                jwt_refresh_days: 7,
                environment: Environment::Development,
                log_format: LogFormat::Pretty,
                auth_users: vec![SeedAccount::new(TEST_USERNAME, TEST_PASSWORD)],
                bcrypt_cost: 4, // Lowest cost bcrypt allows, hashing is not under test here
            };

            let credential_store: Arc<dyn CredentialStore> = Arc::new(
                InMemoryUserRepository::from_accounts(&config.auth_users, config.bcrypt_cost)
                    .expect("Failed to seed credential store"),
            );
            let token_service = Arc::new(TokenService::new(
                TokenCodec::new(config.jwt_secret.as_bytes()),
                config.token_policy().expect("Invalid token policy"),
            ));
            let auth_service = Arc::new(
                AuthService::new(credential_store, token_service.clone(), config.bcrypt_cost)
                    .expect("Failed to build auth service"),
            );
            let auth_controller = Arc::new(AuthController::new(auth_service));

            let app = create_router(token_service, auth_controller);

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                client: TestClient::new(&base_url),
                config,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}

impl TestContext {
    /// Log in with the seeded account and return (access, refresh) tokens
    pub async fn login(&self) -> (String, String) {
        let response = self
            .client
            .post(
                "/auth/login",
                &serde_json::json!({
                    "username": TEST_USERNAME,
                    "password": TEST_PASSWORD
                }),
            )
            .await
            .unwrap();

        let access = response
            .header("x-access-token")
            .expect("Missing x-access-token header")
            .clone();
        let refresh = response
            .header("x-refresh-token")
            .expect("Missing x-refresh-token header")
            .clone();

        (access, refresh)
    }

    /// Codec sharing the server's signing key
    pub fn codec(&self) -> TokenCodec {
        TokenCodec::new(self.config.jwt_secret.as_bytes())
    }

    /// A correctly signed token that expired a minute ago
    pub fn expired_token(&self, token_type: TokenType) -> String {
        self.codec()
            .mint(TEST_USERNAME, token_type, Duration::minutes(-1))
            .unwrap()
    }
}

/// Token for the test user signed with a key the server does not know
pub fn foreign_token(token_type: TokenType) -> String {
    TokenCodec::new(b"someOtherSecretKey1234567890123456789012345")
        .mint(TEST_USERNAME, token_type, Duration::minutes(15))
        .unwrap()
}

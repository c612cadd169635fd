use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::infrastructure::config::Config;
use crate::{
    controllers::{
        auth::{AuthController, X_ACCESS_TOKEN, X_REFRESH_TOKEN},
        health, hello,
    },
    domain::auth::TokenService,
    infrastructure::auth::{auth_middleware, request_id::X_REQUEST_ID, request_id_middleware},
};

/// Build the application router with all routes configured
pub fn create_router(
    token_service: Arc<TokenService>,
    auth_controller: Arc<AuthController>,
) -> Router {
    // Auth routes (public - no auth required)
    let auth_routes = Router::new()
        .route("/auth/login", post(AuthController::login))
        .route("/auth/refresh", post(AuthController::refresh))
        .with_state(auth_controller);

    // API routes (require an access token)
    let api_routes = Router::new()
        .route("/api/hello", get(hello::hello))
        .layer(middleware::from_fn_with_state(
            token_service,
            auth_middleware,
        ));

    // Browsers only let scripts read custom response headers that are exposed
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .expose_headers([
            X_ACCESS_TOKEN,
            X_REFRESH_TOKEN,
            HeaderName::from_static(X_REQUEST_ID),
        ]);

    Router::new()
        .route("/health", get(health::health))
        .merge(auth_routes)
        .merge(api_routes)
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server and serve until the process is stopped
pub async fn start_http_server(
    config: Arc<Config>,
    token_service: Arc<TokenService>,
    auth_controller: Arc<AuthController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(token_service, auth_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

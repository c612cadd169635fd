use axum::Extension;

use crate::infrastructure::auth::AuthUser;

/// GET /api/hello - Greet the authenticated caller
pub async fn hello(Extension(auth_user): Extension<AuthUser>) -> String {
    format!("Hello, {}!", auth_user.username)
}

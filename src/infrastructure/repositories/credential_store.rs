use crate::domain::user::UserCredentials;
use async_trait::async_trait;

/// Lookup of stored credentials by username.
///
/// Abstracts the account backend (in-memory seed accounts, a database, a
/// directory service). Returning `Ok(None)` means the user does not exist;
/// `Err` means the backend itself failed.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserCredentials>>;
}

use super::credential_store::CredentialStore;
use crate::domain::user::UserCredentials;
use crate::infrastructure::config::SeedAccount;
use async_trait::async_trait;
use std::collections::HashMap;

/// Credential store backed by a fixed set of accounts held in memory.
pub struct InMemoryUserRepository {
    users: HashMap<String, UserCredentials>,
}

impl InMemoryUserRepository {
    /// Hash the seed passwords once and keep only the hashes
    pub fn from_accounts(accounts: &[SeedAccount], bcrypt_cost: u32) -> anyhow::Result<Self> {
        let mut users = HashMap::with_capacity(accounts.len());
        for account in accounts {
            let credentials =
                UserCredentials::hashed(&account.username, &account.password, bcrypt_cost)?;
            users.insert(account.username.clone(), credentials);
        }

        tracing::debug!(count = users.len(), "Seeded in-memory credential store");

        Ok(Self { users })
    }
}

#[async_trait]
impl CredentialStore for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserCredentials>> {
        Ok(self.users.get(username).cloned())
    }
}

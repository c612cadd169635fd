/// Stored credential record for one account.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub username: String,
    pub password_hash: String,
}

impl UserCredentials {
    /// Hash `password` with bcrypt at the given cost
    pub fn hashed(username: &str, password: &str, cost: u32) -> anyhow::Result<Self> {
        let setup = pwhash::bcrypt::BcryptSetup {
            cost: Some(cost),
            ..Default::default()
        };
        let password_hash = pwhash::bcrypt::hash_with(setup, password)?;

        Ok(Self {
            username: username.to_string(),
            password_hash,
        })
    }

    /// Compare a plaintext password against the stored hash
    pub fn verify_password(&self, password: &str) -> bool {
        pwhash::unix::verify(password, &self.password_hash)
    }
}

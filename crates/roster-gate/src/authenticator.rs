use async_trait::async_trait;
use roster_core::Credentials;

/// Decides whether a set of credentials is valid.
///
/// Any lockout or rate-limiting policy belongs to implementations of this
/// trait; the gate only sequences attempts.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// `Ok(true)` accepts, `Ok(false)` rejects. `Err` means no verdict.
    async fn verify(&self, credentials: &Credentials) -> anyhow::Result<bool>;
}

/// Accepts exactly one username/password pair, fixed at construction.
///
/// Used with the operator credentials read from the environment.
pub struct StaticAuthenticator {
    expected: Credentials,
}

impl StaticAuthenticator {
    pub fn new(expected: Credentials) -> Self {
        Self { expected }
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn verify(&self, credentials: &Credentials) -> anyhow::Result<bool> {
        Ok(credentials.username == self.expected.username
            && credentials.password == self.expected.password)
    }
}

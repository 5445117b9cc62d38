use std::time::Duration;

use messaging_models::auth::AuthError;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait AuthService: Send + Sync + 'static {
    /// Authenticates an administrator using an access token.
    fn authenticate(&self, token: &str) -> Result<Authentication, AuthError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    /// The `sub` claim of the access token.
    pub subject: String,
    /// Time left until the access token expires.
    pub ttl: Duration,
}

#[cfg(feature = "mock")]
impl MockAuthService {
    pub fn with_authenticate(
        mut self,
        token: &'static str,
        result: Result<Authentication, AuthError>,
    ) -> Self {
        self.expect_authenticate()
            .once()
            .with(mockall::predicate::eq(token))
            .return_once(|_| result);
        self
    }
}

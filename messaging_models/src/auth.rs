use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("The access token is missing or invalid.")]
    InvalidToken,
    #[error("The access token has expired.")]
    Expired,
}

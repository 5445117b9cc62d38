use thiserror::Error;

pub mod auth;
pub mod contact;
pub mod email_address;
mod macros;
pub mod recipient;
pub mod validation;

/// A path or command line identifier that is not a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid ID format")]
pub struct InvalidIdentifier;

/// Parses a strictly numeric, non-negative `i64`.
///
/// Signs, whitespace and anything that overflows `i64` are rejected.
pub(crate) fn parse_id(s: &str) -> Result<i64, InvalidIdentifier> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidIdentifier);
    }
    s.parse().map_err(|_| InvalidIdentifier)
}

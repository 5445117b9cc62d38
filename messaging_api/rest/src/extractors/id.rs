use std::str::FromStr;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::Response,
};
use messaging_models::InvalidIdentifier;

use crate::routes::invalid_id_error;

/// Extract a single numeric id from the request path.
///
/// Anything that is not a positive `i64` written in plain ASCII digits is
/// rejected with `400 Bad Request` before the handler runs.
pub struct ApiId<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiId<T>
where
    S: Send + Sync,
    T: FromStr<Err = InvalidIdentifier>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id_error())?;

        raw.parse().map(Self).map_err(|_| invalid_id_error())
    }
}

use axum::{
    async_trait,
    extract::{rejection::QueryRejection, FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::Response,
};
use serde::de::DeserializeOwned;

use crate::routes::error;

/// Like [`Query`], but invalid query strings are rejected with the usual
/// error body.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(x)| Self(x))
            .map_err(|err: QueryRejection| error(StatusCode::BAD_REQUEST, err.body_text()))
    }
}

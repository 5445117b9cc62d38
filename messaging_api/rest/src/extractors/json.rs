use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::de::DeserializeOwned;

use crate::routes::error;

/// Like [`Json`], but malformed bodies are rejected with `400 Bad Request`
/// and the usual error body.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(request, state)
            .await
            .map(|Json(x)| Self(x))
            .map_err(|err: JsonRejection| error(StatusCode::BAD_REQUEST, err.body_text()))
    }
}

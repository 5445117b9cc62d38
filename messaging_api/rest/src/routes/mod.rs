use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use messaging_models::{auth::AuthError, validation::ValidationError, InvalidIdentifier};

use crate::models::ApiError;

pub mod contact;
pub mod health;
pub mod recipient;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn auth_error(err: AuthError) -> Response {
    match err {
        AuthError::InvalidToken => error(StatusCode::UNAUTHORIZED, "Invalid token"),
        AuthError::Expired => error(StatusCode::UNAUTHORIZED, "Token expired"),
    }
}

fn validation_error(err: ValidationError) -> Response {
    error(StatusCode::BAD_REQUEST, err.to_string())
}

pub fn invalid_id_error() -> Response {
    error(StatusCode::BAD_REQUEST, InvalidIdentifier.to_string())
}

pub fn error(code: StatusCode, detail: impl Into<Cow<'static, str>>) -> Response {
    (
        code,
        Json(ApiError {
            detail: detail.into(),
        }),
    )
        .into_response()
}

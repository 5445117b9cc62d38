use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use messaging_core_recipient_contracts::{
    RecipientCreateError, RecipientDeleteError, RecipientFeatureService, RecipientGetError,
    RecipientListError, RecipientUpdateError,
};
use messaging_models::recipient::RecipientId;

use super::{auth_error, error, internal_server_error, validation_error};
use crate::{
    extractors::{auth::ApiToken, id::ApiId, json::ApiJson, query::ApiQuery},
    models::recipient::{ApiRecipient, ApiRecipientCreate, ApiRecipientFilter, ApiRecipientUpdate},
};

const PATH: &str = "/api/v1/recipients";

pub fn router(service: Arc<impl RecipientFeatureService>) -> Router<()> {
    Router::new()
        .route(PATH, routing::get(list).post(create))
        .route(
            "/api/v1/recipients/:recipient_id",
            routing::get(get).put(update).delete(delete),
        )
        .with_state(service)
}

fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Recipient not found")
}

fn email_conflict() -> Response {
    error(StatusCode::CONFLICT, "Email address already in use")
}

async fn list(
    service: State<Arc<impl RecipientFeatureService>>,
    token: ApiToken,
    ApiQuery(filter): ApiQuery<ApiRecipientFilter>,
) -> Response {
    match service.list_recipients(&token.0, filter.active).await {
        Ok(recipients) => Json(
            recipients
                .into_iter()
                .map(ApiRecipient::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(RecipientListError::Auth(err)) => auth_error(err),
        Err(RecipientListError::Other(err)) => internal_server_error(err),
    }
}

async fn get(
    service: State<Arc<impl RecipientFeatureService>>,
    token: ApiToken,
    ApiId(recipient_id): ApiId<RecipientId>,
) -> Response {
    match service.get_recipient(&token.0, recipient_id).await {
        Ok(recipient) => Json(ApiRecipient::from(recipient)).into_response(),
        Err(RecipientGetError::NotFound) => not_found(),
        Err(RecipientGetError::Auth(err)) => auth_error(err),
        Err(RecipientGetError::Other(err)) => internal_server_error(err),
    }
}

async fn create(
    service: State<Arc<impl RecipientFeatureService>>,
    token: ApiToken,
    ApiJson(request): ApiJson<ApiRecipientCreate>,
) -> Response {
    match service.create_recipient(&token.0, request.into()).await {
        Ok(recipient) => (
            StatusCode::CREATED,
            [(LOCATION, format!("{PATH}/{}", recipient.id))],
            Json(ApiRecipient::from(recipient)),
        )
            .into_response(),
        Err(RecipientCreateError::Validation(err)) => validation_error(err),
        Err(RecipientCreateError::EmailConflict) => email_conflict(),
        Err(RecipientCreateError::Auth(err)) => auth_error(err),
        Err(RecipientCreateError::Other(err)) => internal_server_error(err),
    }
}

async fn update(
    service: State<Arc<impl RecipientFeatureService>>,
    token: ApiToken,
    ApiId(recipient_id): ApiId<RecipientId>,
    ApiJson(request): ApiJson<ApiRecipientUpdate>,
) -> Response {
    match service
        .update_recipient(&token.0, recipient_id, request.into())
        .await
    {
        Ok(recipient) => Json(ApiRecipient::from(recipient)).into_response(),
        Err(RecipientUpdateError::NotFound) => not_found(),
        Err(RecipientUpdateError::Validation(err)) => validation_error(err),
        Err(RecipientUpdateError::EmailConflict) => email_conflict(),
        Err(RecipientUpdateError::Auth(err)) => auth_error(err),
        Err(RecipientUpdateError::Other(err)) => internal_server_error(err),
    }
}

async fn delete(
    service: State<Arc<impl RecipientFeatureService>>,
    token: ApiToken,
    ApiId(recipient_id): ApiId<RecipientId>,
) -> Response {
    match service.delete_recipient(&token.0, recipient_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(RecipientDeleteError::NotFound) => not_found(),
        Err(RecipientDeleteError::Auth(err)) => auth_error(err),
        Err(RecipientDeleteError::Other(err)) => internal_server_error(err),
    }
}

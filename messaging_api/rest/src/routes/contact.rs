use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use messaging_core_contact_contracts::{
    ContactFeatureService, ContactGetError, ContactListError, ContactSubmitError,
};
use messaging_models::contact::ContactMessageId;

use super::{auth_error, error, internal_server_error, validation_error};
use crate::{
    extractors::{auth::ApiToken, id::ApiId, json::ApiJson},
    models::contact::{ApiContactAck, ApiContactForm, ApiContactMessage},
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/v1/contact", routing::post(submit))
        .route("/api/v1/messages", routing::get(list))
        .route("/api/v1/messages/:message_id", routing::get(get))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    ApiJson(form): ApiJson<ApiContactForm>,
) -> Response {
    match service.submit(form.into()).await {
        Ok(()) => (StatusCode::CREATED, Json(ApiContactAck::default())).into_response(),
        Err(ContactSubmitError::Validation(err)) => validation_error(err),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}

async fn list(service: State<Arc<impl ContactFeatureService>>, token: ApiToken) -> Response {
    match service.list_messages(&token.0).await {
        Ok(messages) => Json(
            messages
                .into_iter()
                .map(ApiContactMessage::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(ContactListError::Auth(err)) => auth_error(err),
        Err(ContactListError::Other(err)) => internal_server_error(err),
    }
}

async fn get(
    service: State<Arc<impl ContactFeatureService>>,
    token: ApiToken,
    ApiId(message_id): ApiId<ContactMessageId>,
) -> Response {
    match service.get_message(&token.0, message_id).await {
        Ok(message) => Json(ApiContactMessage::from(message)).into_response(),
        Err(ContactGetError::NotFound) => error(StatusCode::NOT_FOUND, "Contact message not found"),
        Err(ContactGetError::Auth(err)) => auth_error(err),
        Err(ContactGetError::Other(err)) => internal_server_error(err),
    }
}

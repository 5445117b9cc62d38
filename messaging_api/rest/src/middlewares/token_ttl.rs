//! Report the remaining lifetime of a valid admin access token

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::{from_fn_with_state, Next},
    response::{IntoResponse, Response},
    Router,
};
use messaging_auth_contracts::AuthService;

use crate::extractors::auth::ApiToken;

pub const TOKEN_TTL_HEADER: &str = "X-Token-TTL";

pub fn add<S: Clone + Send + Sync + 'static>(
    router: Router<S>,
    auth: Arc<impl AuthService>,
) -> Router<S> {
    router.layer(from_fn_with_state(auth, middleware))
}

async fn middleware<Auth: AuthService>(
    State(auth): State<Arc<Auth>>,
    ApiToken(token): ApiToken,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if token.is_empty() {
        return response;
    }

    match auth.authenticate(&token) {
        Ok(authentication) => (
            [(TOKEN_TTL_HEADER, authentication.ttl.as_secs().to_string())],
            response,
        )
            .into_response(),
        Err(_) => response,
    }
}

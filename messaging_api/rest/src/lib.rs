use std::{net::IpAddr, sync::Arc};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use messaging_auth_contracts::AuthService;
use messaging_core_contact_contracts::ContactFeatureService;
use messaging_core_health_contracts::HealthFeatureService;
use messaging_core_recipient_contracts::RecipientFeatureService;
use messaging_di::Build;
use messaging_utils::Apply;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

mod extractors;
mod middlewares;
mod models;
mod routes;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Build)]
pub struct RestServer<Health, Contact, Recipient, Auth> {
    health: Health,
    contact: Contact,
    recipient: Recipient,
    auth: Auth,
    config: RestServerConfig,
}

#[derive(Debug, Clone, Default)]
pub struct RestServerConfig {
    /// Origins allowed to make cross-origin requests. CORS is disabled if
    /// this list is empty.
    pub allowed_origins: Vec<HeaderValue>,
}

impl<Health, Contact, Recipient, Auth> RestServer<Health, Contact, Recipient, Auth>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
    Recipient: RecipientFeatureService,
    Auth: AuthService,
{
    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        info!("Listening on {host}:{port}");
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let cors = (!self.config.allowed_origins.is_empty()).then(|| {
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(self.config.allowed_origins))
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        });
        let auth = Arc::new(self.auth);

        Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::recipient::router(self.recipient.into()))
            .apply(|router| middlewares::token_ttl::add(router, auth))
            .apply(middlewares::panic_handler::add)
            .apply_map(cors, |router, cors| router.layer(cors))
            .apply(middlewares::trace::add)
            .apply(middlewares::request_id::add)
    }
}

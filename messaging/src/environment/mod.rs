use anyhow::Context;
use axum::http::HeaderValue;
use messaging_api_rest::RestServerConfig;
use messaging_config::Config;
use messaging_core_health_impl::HealthFeatureConfig;
use messaging_di::provider;
use messaging_shared_impl::jwt::JwtServiceConfig;
use types::{Database, Queue};

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        database: Database,
        queue: Queue,
        ..config: ConfigProvider {
            RestServerConfig,
            JwtServiceConfig,
            HealthFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, database: Database, queue: Queue) -> Self {
        Self::from_parts(database, queue, config)
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        rest_server_config: RestServerConfig,
        jwt_service_config: JwtServiceConfig,
        health_feature_config: HealthFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let rest_server_config = RestServerConfig {
            allowed_origins: config
                .http
                .allowed_origins
                .iter()
                .map(|origin| {
                    origin
                        .parse::<HeaderValue>()
                        .with_context(|| format!("Invalid allowed origin: {origin:?}"))
                })
                .collect::<anyhow::Result<_>>()?,
        };

        let jwt_service_config = JwtServiceConfig::new(&config.jwt.secret)?;

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Ok(Self::from_parts(
            rest_server_config,
            jwt_service_config,
            health_feature_config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use messaging_di::Provide;
    use messaging_persistence_postgres::PostgresDatabase;
    use messaging_queue_valkey::ValkeyQueue;
    use types::{ContactFeature, RestServer};

    use super::*;

    fn dev_config() -> Config {
        messaging_config::load_paths(&[messaging_config::DEFAULT_CONFIG_PATH], false).unwrap()
    }

    #[tokio::test]
    async fn provide_rest_server() {
        let config_provider = ConfigProvider::new(&dev_config()).unwrap();

        let database = PostgresDatabase::dummy().await;
        let queue = ValkeyQueue::dummy().await;

        let mut provider = Provider::new(config_provider, database, queue);
        let _: RestServer = provider.provide();
        let _: ContactFeature = provider.provide();
    }

    #[test]
    fn invalid_allowed_origin() {
        let mut config = dev_config();
        config.http.allowed_origins = vec!["https://example.com\n".into()];

        assert!(ConfigProvider::new(&config).is_err());
    }

    #[test]
    fn short_jwt_secret() {
        let mut config = dev_config();
        config.jwt.secret = "too short".into();

        assert!(ConfigProvider::new(&config).is_err());
    }
}

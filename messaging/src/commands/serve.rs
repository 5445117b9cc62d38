use messaging_config::Config;
use messaging_di::Provide;
use messaging_persistence_contracts::Database;
use messaging_queue_contracts::QueueService;
use tracing::{info, warn};

use crate::{
    database,
    environment::{types::RestServer, ConfigProvider, Provider},
    queue,
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database");
    let database = database::connect(&config.database).await?;
    database.ping().await?;

    info!("Applying pending migrations");
    let mut applied = false;
    for name in database.run_migrations(None).await? {
        info!("Applied {name}");
        applied = true;
    }
    if !applied {
        info!("No migrations pending");
    }

    // Contact messages are still accepted while the queue is down, so an
    // unreachable queue must not prevent the server from starting.
    info!("Connecting to valkey queue");
    let queue = queue::connect(&config.queue).await?;
    if let Err(err) = queue.ping().await {
        warn!("Valkey queue is not reachable: {err:#}");
    }

    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider, database, queue);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use messaging_core_health_contracts::{HealthFeatureService, HealthStatus};
use messaging_di::Build;
use messaging_persistence_contracts::Database;
use messaging_queue_contracts::QueueService;
use messaging_shared_contracts::time::TimeService;
use messaging_utils::trace_instrument;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Time, Db, Queue> {
    time: Time,
    db: Db,
    queue: Queue,
    config: HealthFeatureConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Db, Queue> HealthFeatureService for HealthFeatureServiceImpl<Time, Db, Queue>
where
    Time: TimeService,
    Db: Database,
    Queue: QueueService,
{
    #[trace_instrument(skip(self))]
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }

        let database = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping database: {err:#}"))
            .is_ok();

        let queue = self
            .queue
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping queue: {err:#}"))
            .is_ok();

        let status = HealthStatus { database, queue };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: now,
            })
            .status
    }
}

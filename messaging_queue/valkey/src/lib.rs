use std::{fmt::Debug, sync::Arc, time::Duration};

use anyhow::Context;
use bb8_redis::{
    bb8::Pool,
    redis::{self, AsyncCommands},
    RedisConnectionManager,
};
use messaging_queue_contracts::QueueService;
use messaging_utils::trace_instrument;
use serde::Serialize;

/// Publishes JSON encoded events to a Valkey list. Producers push to the head
/// (`LPUSH`), so consumers pop from the tail (`RPOP`/`BRPOP`) to get FIFO
/// order.
#[derive(Debug, Clone)]
pub struct ValkeyQueue {
    pool: Pool<RedisConnectionManager>,
    key: Arc<str>,
}

#[derive(Debug)]
pub struct ValkeyQueueConfig {
    pub url: String,
    pub key: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

impl ValkeyQueue {
    pub async fn connect(config: &ValkeyQueueConfig) -> anyhow::Result<Self> {
        let manager = RedisConnectionManager::new(config.url.as_str())?;
        let pool = Pool::builder()
            .max_size(config.max_connections)
            .min_idle(config.min_connections)
            .connection_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(config.max_lifetime)
            .build(manager)
            .await?;

        Ok(Self {
            pool,
            key: config.key.as_str().into(),
        })
    }

    #[cfg(feature = "dummy")]
    pub async fn dummy() -> Self {
        let manager = RedisConnectionManager::new("redis://dummy").unwrap();
        Self {
            pool: Pool::builder().build_unchecked(manager),
            key: "dummy".into(),
        }
    }
}

/// Consumer side helpers used by the integration tests.
#[cfg(feature = "testing")]
impl ValkeyQueue {
    /// Removes all pending events.
    pub async fn clear(&self) -> anyhow::Result<()> {
        let mut conn = self
            .pool
            .get()
            .await
            .context("Failed to acquire queue connection")?;
        conn.del::<_, ()>(&*self.key)
            .await
            .context("Failed to clear queue")
    }

    /// Returns the number of pending events.
    pub async fn len(&self) -> anyhow::Result<usize> {
        let mut conn = self
            .pool
            .get()
            .await
            .context("Failed to acquire queue connection")?;
        conn.llen(&*self.key)
            .await
            .context("Failed to read queue length")
    }

    /// Removes and returns the oldest pending event.
    pub async fn pop<T: serde::de::DeserializeOwned>(&self) -> anyhow::Result<Option<T>> {
        let mut conn = self
            .pool
            .get()
            .await
            .context("Failed to acquire queue connection")?;

        let payload = conn
            .rpop::<_, Option<String>>(&*self.key, None)
            .await
            .context("Failed to pop event from queue")?;

        payload
            .map(|x| serde_json::from_str(&x))
            .transpose()
            .context("Failed to deserialize event")
    }
}

impl QueueService for ValkeyQueue {
    #[trace_instrument(skip(self))]
    async fn publish<T: Serialize + Debug + Sync + 'static>(&self, event: &T) -> anyhow::Result<()> {
        let payload = serde_json::to_string(event).context("Failed to serialize event")?;

        let mut conn = self
            .pool
            .get()
            .await
            .context("Failed to acquire queue connection")?;

        conn.lpush::<_, _, ()>(&*self.key, payload)
            .await
            .context("Failed to push event to queue")
    }

    #[trace_instrument(skip(self))]
    async fn ping(&self) -> anyhow::Result<()> {
        let mut conn = self
            .pool
            .get()
            .await
            .context("Failed to acquire queue connection")?;

        redis::cmd("PING")
            .exec_async(&mut *conn)
            .await
            .context("Failed to ping queue")
    }
}

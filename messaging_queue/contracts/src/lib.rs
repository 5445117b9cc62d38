use std::{fmt::Debug, future::Future};

use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait QueueService: Send + Sync + 'static {
    /// Appends an event to the queue.
    ///
    /// Delivery is at most once from the point of view of the caller; there
    /// is no retry.
    fn publish<T: Serialize + Debug + Sync + 'static>(
        &self,
        event: &T,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Verify the connection to the queue.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockQueueService {
    pub fn with_publish<T: Debug + PartialEq + Serialize + Send + Sync + 'static>(
        mut self,
        event: T,
        result: anyhow::Result<()>,
    ) -> Self {
        self.expect_publish()
            .once()
            .with(mockall::predicate::eq(event))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_ping(mut self, result: anyhow::Result<()>) -> Self {
        self.expect_ping()
            .once()
            .return_once(|| Box::pin(std::future::ready(result)));
        self
    }
}

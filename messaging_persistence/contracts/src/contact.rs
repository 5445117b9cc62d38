use std::future::Future;

use chrono::{DateTime, Utc};
use messaging_models::contact::{
    ContactMessage, ContactMessageId, ContactMessageStatusUpdate, NewContactMessage,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactMessageRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns all contact messages, newest first.
    fn list(&self, txn: &mut Txn) -> impl Future<Output = anyhow::Result<Vec<ContactMessage>>> + Send;

    /// Returns the contact message with the given id.
    fn get(
        &self,
        txn: &mut Txn,
        message_id: ContactMessageId,
    ) -> impl Future<Output = anyhow::Result<Option<ContactMessage>>> + Send;

    /// Stores a new contact message with status `pending` and no delivery
    /// attempts.
    fn create(
        &self,
        txn: &mut Txn,
        message: &NewContactMessage,
        created_at: DateTime<Utc>,
    ) -> impl Future<Output = anyhow::Result<ContactMessage>> + Send;

    /// Transitions the status of a contact message.
    ///
    /// `sent` also sets `sent_at`, `failed` increments the attempt counter.
    /// Returns `false` if the message does not exist.
    fn update_status(
        &self,
        txn: &mut Txn,
        message_id: ContactMessageId,
        update: &ContactMessageStatusUpdate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactMessageRepository<Txn> {
    pub fn with_list(mut self, result: anyhow::Result<Vec<ContactMessage>>) -> Self {
        self.expect_list()
            .once()
            .with(mockall::predicate::always())
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_get(
        mut self,
        message_id: ContactMessageId,
        result: anyhow::Result<Option<ContactMessage>>,
    ) -> Self {
        self.expect_get()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(message_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_create(
        mut self,
        message: NewContactMessage,
        created_at: DateTime<Utc>,
        result: anyhow::Result<ContactMessage>,
    ) -> Self {
        self.expect_create()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(message),
                mockall::predicate::eq(created_at),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_update_status(
        mut self,
        message_id: ContactMessageId,
        update: ContactMessageStatusUpdate,
        result: anyhow::Result<bool>,
    ) -> Self {
        self.expect_update_status()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(message_id),
                mockall::predicate::eq(update),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }
}

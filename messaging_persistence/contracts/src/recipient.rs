use std::future::Future;

use chrono::{DateTime, Utc};
use messaging_models::recipient::{NewRecipient, Recipient, RecipientId};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RecipientRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Returns all recipients ordered by name.
    fn list(&self, txn: &mut Txn) -> impl Future<Output = anyhow::Result<Vec<Recipient>>> + Send;

    /// Returns all active recipients ordered by name.
    fn list_active(
        &self,
        txn: &mut Txn,
    ) -> impl Future<Output = anyhow::Result<Vec<Recipient>>> + Send;

    /// Returns the recipient with the given id.
    fn get(
        &self,
        txn: &mut Txn,
        recipient_id: RecipientId,
    ) -> impl Future<Output = anyhow::Result<Option<Recipient>>> + Send;

    /// Creates a new recipient and returns it with its assigned id.
    ///
    /// Returns an error if a recipient with the same email address already
    /// exists.
    fn create(
        &self,
        txn: &mut Txn,
        recipient: &NewRecipient,
        created_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<Recipient, RecipientRepoError>> + Send;

    /// Overwrites all mutable fields of the stored recipient.
    ///
    /// Returns `false` if the recipient does not exist.
    fn update(
        &self,
        txn: &mut Txn,
        recipient: &Recipient,
    ) -> impl Future<Output = Result<bool, RecipientRepoError>> + Send;

    /// Returns `false` if the recipient does not exist.
    fn delete(
        &self,
        txn: &mut Txn,
        recipient_id: RecipientId,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[derive(Debug, Error)]
pub enum RecipientRepoError {
    #[error("A recipient with the same email address already exists.")]
    EmailConflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockRecipientRepository<Txn> {
    pub fn with_list(mut self, result: anyhow::Result<Vec<Recipient>>) -> Self {
        self.expect_list()
            .once()
            .with(mockall::predicate::always())
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_active(mut self, result: anyhow::Result<Vec<Recipient>>) -> Self {
        self.expect_list_active()
            .once()
            .with(mockall::predicate::always())
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_get(
        mut self,
        recipient_id: RecipientId,
        result: anyhow::Result<Option<Recipient>>,
    ) -> Self {
        self.expect_get()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(recipient_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_create(
        mut self,
        recipient: NewRecipient,
        created_at: DateTime<Utc>,
        result: Result<Recipient, RecipientRepoError>,
    ) -> Self {
        self.expect_create()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(created_at),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_update(
        mut self,
        recipient: Recipient,
        result: Result<bool, RecipientRepoError>,
    ) -> Self {
        self.expect_update()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(recipient),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_delete(mut self, recipient_id: RecipientId, result: anyhow::Result<bool>) -> Self {
        self.expect_delete()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(recipient_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}

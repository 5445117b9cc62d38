use std::future::Future;

use messaging_models::{
    auth::AuthError,
    recipient::{Recipient, RecipientForm, RecipientId, RecipientUpdateForm},
    validation::ValidationError,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RecipientFeatureService: Send + Sync + 'static {
    /// Return all recipients ordered by name.
    ///
    /// If `active_only` is set, inactive recipients are omitted.
    ///
    /// Requires admin privileges.
    fn list_recipients(
        &self,
        token: &str,
        active_only: bool,
    ) -> impl Future<Output = Result<Vec<Recipient>, RecipientListError>> + Send;

    /// Return the recipient with the given id.
    ///
    /// Requires admin privileges.
    fn get_recipient(
        &self,
        token: &str,
        recipient_id: RecipientId,
    ) -> impl Future<Output = Result<Recipient, RecipientGetError>> + Send;

    /// Create a new recipient. `is_active` defaults to `true`.
    ///
    /// Requires admin privileges.
    fn create_recipient(
        &self,
        token: &str,
        form: RecipientForm,
    ) -> impl Future<Output = Result<Recipient, RecipientCreateError>> + Send;

    /// Update a recipient. Fields missing from the form keep their current
    /// value.
    ///
    /// Requires admin privileges.
    fn update_recipient(
        &self,
        token: &str,
        recipient_id: RecipientId,
        form: RecipientUpdateForm,
    ) -> impl Future<Output = Result<Recipient, RecipientUpdateError>> + Send;

    /// Delete a recipient.
    ///
    /// Requires admin privileges.
    fn delete_recipient(
        &self,
        token: &str,
        recipient_id: RecipientId,
    ) -> impl Future<Output = Result<(), RecipientDeleteError>> + Send;
}

#[derive(Debug, Error)]
pub enum RecipientListError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum RecipientGetError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("The recipient does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum RecipientCreateError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("A recipient with the same email address already exists.")]
    EmailConflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum RecipientUpdateError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("The recipient does not exist.")]
    NotFound,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("A recipient with the same email address already exists.")]
    EmailConflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum RecipientDeleteError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("The recipient does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockRecipientFeatureService {
    pub fn with_list_recipients(
        mut self,
        token: &'static str,
        active_only: bool,
        result: Result<Vec<Recipient>, RecipientListError>,
    ) -> Self {
        self.expect_list_recipients()
            .once()
            .with(
                mockall::predicate::eq(token),
                mockall::predicate::eq(active_only),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_get_recipient(
        mut self,
        token: &'static str,
        recipient_id: RecipientId,
        result: Result<Recipient, RecipientGetError>,
    ) -> Self {
        self.expect_get_recipient()
            .once()
            .with(
                mockall::predicate::eq(token),
                mockall::predicate::eq(recipient_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_create_recipient(
        mut self,
        token: &'static str,
        form: RecipientForm,
        result: Result<Recipient, RecipientCreateError>,
    ) -> Self {
        self.expect_create_recipient()
            .once()
            .with(mockall::predicate::eq(token), mockall::predicate::eq(form))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_update_recipient(
        mut self,
        token: &'static str,
        recipient_id: RecipientId,
        form: RecipientUpdateForm,
        result: Result<Recipient, RecipientUpdateError>,
    ) -> Self {
        self.expect_update_recipient()
            .once()
            .with(
                mockall::predicate::eq(token),
                mockall::predicate::eq(recipient_id),
                mockall::predicate::eq(form),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_delete_recipient(
        mut self,
        token: &'static str,
        recipient_id: RecipientId,
        result: Result<(), RecipientDeleteError>,
    ) -> Self {
        self.expect_delete_recipient()
            .once()
            .with(
                mockall::predicate::eq(token),
                mockall::predicate::eq(recipient_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}

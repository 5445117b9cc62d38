use std::future::Future;

use messaging_models::{
    auth::AuthError,
    contact::{ContactMessage, ContactMessageForm, ContactMessageId, ContactMessageStatus},
    validation::ValidationError,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Store a message submitted via the public contact form and announce it
    /// on the queue.
    ///
    /// Submissions with a non-empty honeypot field are acknowledged without
    /// being stored. Publishing is best effort; a failure is logged and does
    /// not affect the result.
    fn submit(
        &self,
        form: ContactMessageForm,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;

    /// Return all contact messages, newest first.
    ///
    /// Requires admin privileges.
    fn list_messages(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Vec<ContactMessage>, ContactListError>> + Send;

    /// Return the contact message with the given id.
    ///
    /// Requires admin privileges.
    fn get_message(
        &self,
        token: &str,
        message_id: ContactMessageId,
    ) -> impl Future<Output = Result<ContactMessage, ContactGetError>> + Send;

    /// Record the delivery status of a contact message.
    ///
    /// - `sent` also sets `sent_at`.
    /// - `failed` also increments `attempts`.
    /// - The stored error is only replaced if `last_error` is set.
    fn update_status(
        &self,
        message_id: ContactMessageId,
        status: ContactMessageStatus,
        last_error: Option<String>,
    ) -> impl Future<Output = Result<(), ContactUpdateStatusError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ContactListError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ContactGetError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("The contact message does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ContactUpdateStatusError {
    #[error("The contact message does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        form: ContactMessageForm,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_messages(
        mut self,
        token: &'static str,
        result: Result<Vec<ContactMessage>, ContactListError>,
    ) -> Self {
        self.expect_list_messages()
            .once()
            .with(mockall::predicate::eq(token))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_get_message(
        mut self,
        token: &'static str,
        message_id: ContactMessageId,
        result: Result<ContactMessage, ContactGetError>,
    ) -> Self {
        self.expect_get_message()
            .once()
            .with(
                mockall::predicate::eq(token),
                mockall::predicate::eq(message_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}

use messaging_auth_contracts::AuthService;
use messaging_core_contact_contracts::{
    ContactFeatureService, ContactGetError, ContactListError, ContactSubmitError,
    ContactUpdateStatusError,
};
use messaging_di::Build;
use messaging_models::contact::{
    ContactMessage, ContactMessageEvent, ContactMessageForm, ContactMessageId,
    ContactMessageStatus, ContactMessageStatusUpdate,
};
use messaging_persistence_contracts::{contact::ContactMessageRepository, Database, Transaction};
use messaging_queue_contracts::QueueService;
use messaging_shared_contracts::time::TimeService;
use messaging_utils::trace_instrument;
use tracing::{error, info};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Build)]
pub struct ContactFeatureServiceImpl<Db, Auth, Time, Queue, ContactRepo> {
    db: Db,
    auth: Auth,
    time: Time,
    queue: Queue,
    contact_repo: ContactRepo,
}

impl<Db, Auth, Time, Queue, ContactRepo> ContactFeatureService
    for ContactFeatureServiceImpl<Db, Auth, Time, Queue, ContactRepo>
where
    Db: Database,
    Auth: AuthService,
    Time: TimeService,
    Queue: QueueService,
    ContactRepo: ContactMessageRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn submit(&self, form: ContactMessageForm) -> Result<(), ContactSubmitError> {
        let spam = form.is_spam();
        let message = form.validate()?;

        if spam {
            info!("Discarding contact message with non-empty honeypot");
            return Ok(());
        }

        let mut txn = self.db.begin_transaction().await?;
        let message = self
            .contact_repo
            .create(&mut txn, &message, self.time.now())
            .await?;
        txn.commit().await?;

        let event = ContactMessageEvent {
            message_id: message.id,
        };
        if let Err(err) = self.queue.publish(&event).await {
            error!(message_id = %message.id, "Failed to publish contact message event: {err:#}");
        }

        Ok(())
    }

    #[trace_instrument(skip(self))]
    async fn list_messages(&self, token: &str) -> Result<Vec<ContactMessage>, ContactListError> {
        self.auth.authenticate(token)?;

        let mut txn = self.db.begin_transaction().await?;
        self.contact_repo
            .list(&mut txn)
            .await
            .map_err(Into::into)
    }

    #[trace_instrument(skip(self))]
    async fn get_message(
        &self,
        token: &str,
        message_id: ContactMessageId,
    ) -> Result<ContactMessage, ContactGetError> {
        self.auth.authenticate(token)?;

        let mut txn = self.db.begin_transaction().await?;
        self.contact_repo
            .get(&mut txn, message_id)
            .await?
            .ok_or(ContactGetError::NotFound)
    }

    #[trace_instrument(skip(self))]
    async fn update_status(
        &self,
        message_id: ContactMessageId,
        status: ContactMessageStatus,
        last_error: Option<String>,
    ) -> Result<(), ContactUpdateStatusError> {
        let update = ContactMessageStatusUpdate {
            status,
            last_error,
            updated_at: self.time.now(),
        };

        let mut txn = self.db.begin_transaction().await?;
        if !self
            .contact_repo
            .update_status(&mut txn, message_id, &update)
            .await?
        {
            return Err(ContactUpdateStatusError::NotFound);
        }
        txn.commit().await?;

        Ok(())
    }
}

use messaging_auth_contracts::AuthService;
use messaging_core_recipient_contracts::{
    RecipientCreateError, RecipientDeleteError, RecipientFeatureService, RecipientGetError,
    RecipientListError, RecipientUpdateError,
};
use messaging_di::Build;
use messaging_models::recipient::{Recipient, RecipientForm, RecipientId, RecipientUpdateForm};
use messaging_persistence_contracts::{
    recipient::{RecipientRepoError, RecipientRepository},
    Database, Transaction,
};
use messaging_shared_contracts::time::TimeService;
use messaging_utils::{patch::Patch, trace_instrument};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Build)]
pub struct RecipientFeatureServiceImpl<Db, Auth, Time, RecipientRepo> {
    db: Db,
    auth: Auth,
    time: Time,
    recipient_repo: RecipientRepo,
}

impl<Db, Auth, Time, RecipientRepo> RecipientFeatureService
    for RecipientFeatureServiceImpl<Db, Auth, Time, RecipientRepo>
where
    Db: Database,
    Auth: AuthService,
    Time: TimeService,
    RecipientRepo: RecipientRepository<Db::Transaction>,
{
    #[trace_instrument(skip(self))]
    async fn list_recipients(
        &self,
        token: &str,
        active_only: bool,
    ) -> Result<Vec<Recipient>, RecipientListError> {
        self.auth.authenticate(token)?;

        let mut txn = self.db.begin_transaction().await?;
        let recipients = if active_only {
            self.recipient_repo.list_active(&mut txn).await?
        } else {
            self.recipient_repo.list(&mut txn).await?
        };

        Ok(recipients)
    }

    #[trace_instrument(skip(self))]
    async fn get_recipient(
        &self,
        token: &str,
        recipient_id: RecipientId,
    ) -> Result<Recipient, RecipientGetError> {
        self.auth.authenticate(token)?;

        let mut txn = self.db.begin_transaction().await?;
        self.recipient_repo
            .get(&mut txn, recipient_id)
            .await?
            .ok_or(RecipientGetError::NotFound)
    }

    #[trace_instrument(skip(self))]
    async fn create_recipient(
        &self,
        token: &str,
        form: RecipientForm,
    ) -> Result<Recipient, RecipientCreateError> {
        self.auth.authenticate(token)?;

        let recipient = form.validate()?;

        let mut txn = self.db.begin_transaction().await?;
        let recipient = self
            .recipient_repo
            .create(&mut txn, &recipient, self.time.now())
            .await
            .map_err(|err| match err {
                RecipientRepoError::EmailConflict => RecipientCreateError::EmailConflict,
                RecipientRepoError::Other(err) => err.into(),
            })?;
        txn.commit().await?;

        Ok(recipient)
    }

    #[trace_instrument(skip(self))]
    async fn update_recipient(
        &self,
        token: &str,
        recipient_id: RecipientId,
        form: RecipientUpdateForm,
    ) -> Result<Recipient, RecipientUpdateError> {
        self.auth.authenticate(token)?;

        let mut txn = self.db.begin_transaction().await?;
        let recipient = self
            .recipient_repo
            .get(&mut txn, recipient_id)
            .await?
            .ok_or(RecipientUpdateError::NotFound)?;

        let patch = form.validate()?;
        let recipient = Recipient {
            updated_at: self.time.now(),
            ..recipient.update(patch)
        };

        let updated = self
            .recipient_repo
            .update(&mut txn, &recipient)
            .await
            .map_err(|err| match err {
                RecipientRepoError::EmailConflict => RecipientUpdateError::EmailConflict,
                RecipientRepoError::Other(err) => err.into(),
            })?;
        if !updated {
            return Err(RecipientUpdateError::NotFound);
        }
        txn.commit().await?;

        Ok(recipient)
    }

    #[trace_instrument(skip(self))]
    async fn delete_recipient(
        &self,
        token: &str,
        recipient_id: RecipientId,
    ) -> Result<(), RecipientDeleteError> {
        self.auth.authenticate(token)?;

        let mut txn = self.db.begin_transaction().await?;
        if !self.recipient_repo.delete(&mut txn, recipient_id).await? {
            return Err(RecipientDeleteError::NotFound);
        }
        txn.commit().await?;

        Ok(())
    }
}

use bb8_postgres::tokio_postgres::{self, Row};
use chrono::{DateTime, Utc};
use messaging_di::Build;
use messaging_models::{
    email_address::EmailAddress,
    recipient::{NewRecipient, Recipient, RecipientId},
};
use messaging_persistence_contracts::recipient::{RecipientRepoError, RecipientRepository};

use crate::{columns, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct PostgresRecipientRepository;

columns!(recipient as "r": "id", "email", "name", "is_active", "created_at", "updated_at");

impl RecipientRepository<PostgresTransaction> for PostgresRecipientRepository {
    async fn list(&self, txn: &mut PostgresTransaction) -> anyhow::Result<Vec<Recipient>> {
        txn.txn()
            .query(
                &format!("select {RECIPIENT_COLS} from recipients r order by r.name asc, r.id asc"),
                &[],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_recipient(&row, &mut 0))
                    .collect()
            })
    }

    async fn list_active(&self, txn: &mut PostgresTransaction) -> anyhow::Result<Vec<Recipient>> {
        txn.txn()
            .query(
                &format!(
                    "select {RECIPIENT_COLS} from recipients r where r.is_active order by r.name \
                     asc, r.id asc"
                ),
                &[],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_recipient(&row, &mut 0))
                    .collect()
            })
    }

    async fn get(
        &self,
        txn: &mut PostgresTransaction,
        recipient_id: RecipientId,
    ) -> anyhow::Result<Option<Recipient>> {
        txn.txn()
            .query_opt(
                &format!("select {RECIPIENT_COLS} from recipients r where r.id=$1"),
                &[&*recipient_id],
            )
            .await
            .map_err(Into::into)
            .and_then(|row| row.map(|row| decode_recipient(&row, &mut 0)).transpose())
    }

    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        recipient: &NewRecipient,
        created_at: DateTime<Utc>,
    ) -> Result<Recipient, RecipientRepoError> {
        let row = txn
            .txn()
            .query_one(
                &format!(
                    "insert into recipients (email, name, is_active, created_at, updated_at) \
                     values ($1, $2, $3, $4, $4) returning {RECIPIENT_COL_NAMES}"
                ),
                &[
                    &recipient.email.as_str(),
                    &recipient.name.as_str(),
                    &recipient.is_active,
                    &created_at,
                ],
            )
            .await
            .map_err(map_recipient_repo_error)?;

        decode_recipient(&row, &mut 0).map_err(Into::into)
    }

    async fn update(
        &self,
        txn: &mut PostgresTransaction,
        recipient: &Recipient,
    ) -> Result<bool, RecipientRepoError> {
        txn.txn()
            .execute(
                "update recipients set email=$2, name=$3, is_active=$4, updated_at=$5 where id=$1",
                &[
                    &*recipient.id,
                    &recipient.email.as_str(),
                    &recipient.name.as_str(),
                    &recipient.is_active,
                    &recipient.updated_at,
                ],
            )
            .await
            .map(|x| x != 0)
            .map_err(map_recipient_repo_error)
    }

    async fn delete(
        &self,
        txn: &mut PostgresTransaction,
        recipient_id: RecipientId,
    ) -> anyhow::Result<bool> {
        txn.txn()
            .execute("delete from recipients where id=$1", &[&*recipient_id])
            .await
            .map(|x| x != 0)
            .map_err(Into::into)
    }
}

fn decode_recipient(row: &Row, offset: &mut usize) -> anyhow::Result<Recipient> {
    let mut idx = || {
        *offset += 1;
        *offset - 1
    };

    Ok(Recipient {
        id: RecipientId::try_new(row.get::<_, i64>(idx()))?,
        email: EmailAddress::try_new(row.get::<_, String>(idx()))?,
        name: row.get::<_, String>(idx()).try_into()?,
        is_active: row.get(idx()),
        created_at: row.get(idx()),
        updated_at: row.get(idx()),
    })
}

fn map_recipient_repo_error(err: tokio_postgres::Error) -> RecipientRepoError {
    match err.as_db_error() {
        Some(err) if err.constraint() == Some("recipients_email_idx") => {
            RecipientRepoError::EmailConflict
        }
        _ => RecipientRepoError::Other(err.into()),
    }
}

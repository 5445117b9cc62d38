use bb8_postgres::tokio_postgres::Row;
use chrono::{DateTime, Utc};
use messaging_di::Build;
use messaging_models::{
    contact::{
        ContactMessage, ContactMessageAuthor, ContactMessageId, ContactMessageStatus,
        ContactMessageStatusUpdate, NewContactMessage,
    },
    email_address::EmailAddress,
};
use messaging_persistence_contracts::contact::ContactMessageRepository;

use crate::{columns, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct PostgresContactMessageRepository;

columns!(message as "m": "id", "name", "email", "subject", "message", "status", "last_error", "attempts", "sent_at", "created_at", "updated_at");

impl ContactMessageRepository<PostgresTransaction> for PostgresContactMessageRepository {
    async fn list(&self, txn: &mut PostgresTransaction) -> anyhow::Result<Vec<ContactMessage>> {
        txn.txn()
            .query(
                &format!(
                    "select {MESSAGE_COLS} from contact_messages m order by m.created_at desc, \
                     m.id desc"
                ),
                &[],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_message(&row, &mut 0))
                    .collect()
            })
    }

    async fn get(
        &self,
        txn: &mut PostgresTransaction,
        message_id: ContactMessageId,
    ) -> anyhow::Result<Option<ContactMessage>> {
        txn.txn()
            .query_opt(
                &format!("select {MESSAGE_COLS} from contact_messages m where m.id=$1"),
                &[&*message_id],
            )
            .await
            .map_err(Into::into)
            .and_then(|row| row.map(|row| decode_message(&row, &mut 0)).transpose())
    }

    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        message: &NewContactMessage,
        created_at: DateTime<Utc>,
    ) -> anyhow::Result<ContactMessage> {
        let row = txn
            .txn()
            .query_one(
                &format!(
                    "insert into contact_messages (name, email, subject, message, status, \
                     attempts, created_at, updated_at) values ($1, $2, $3, $4, $5, 0, $6, $6) \
                     returning {MESSAGE_COL_NAMES}"
                ),
                &[
                    &message.author.name.as_str(),
                    &message.author.email.as_str(),
                    &message.subject.as_str(),
                    &message.content.as_str(),
                    &ContactMessageStatus::Pending.as_str(),
                    &created_at,
                ],
            )
            .await?;

        decode_message(&row, &mut 0)
    }

    async fn update_status(
        &self,
        txn: &mut PostgresTransaction,
        message_id: ContactMessageId,
        update: &ContactMessageStatusUpdate,
    ) -> anyhow::Result<bool> {
        txn.txn()
            .execute(
                "update contact_messages set status=$2, last_error=coalesce($3, last_error), \
                 attempts=attempts + (case when $2='failed' then 1 else 0 end), sent_at=(case \
                 when $2='sent' then $4 else sent_at end), updated_at=$4 where id=$1",
                &[
                    &*message_id,
                    &update.status.as_str(),
                    &update.last_error,
                    &update.updated_at,
                ],
            )
            .await
            .map(|x| x != 0)
            .map_err(Into::into)
    }
}

fn decode_message(row: &Row, offset: &mut usize) -> anyhow::Result<ContactMessage> {
    let mut idx = || {
        *offset += 1;
        *offset - 1
    };

    Ok(ContactMessage {
        id: ContactMessageId::try_new(row.get::<_, i64>(idx()))?,
        author: ContactMessageAuthor {
            name: row.get::<_, String>(idx()).try_into()?,
            email: EmailAddress::try_new(row.get::<_, String>(idx()))?,
        },
        subject: row.get::<_, String>(idx()).try_into()?,
        content: row.get::<_, String>(idx()).try_into()?,
        status: row.get::<_, String>(idx()).parse()?,
        last_error: row.get(idx()),
        attempts: row.get(idx()),
        sent_at: row.get(idx()),
        created_at: row.get(idx()),
        updated_at: row.get(idx()),
    })
}

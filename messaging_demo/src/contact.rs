use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use messaging_models::contact::{
    ContactMessage, ContactMessageAuthor, ContactMessageId, ContactMessageStatus,
    ContactMessageStatusUpdate,
    NewContactMessage,
};
use messaging_persistence_contracts::contact::ContactMessageRepository;

/// All demo contact messages in insertion order.
pub static ALL_MESSAGES: LazyLock<Vec<&ContactMessage>> =
    LazyLock::new(|| vec![&PENDING, &SENT]);

pub static PENDING: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    id: ContactMessageId::try_new(1).unwrap(),
    author: ContactMessageAuthor {
        name: "Max Mustermann".try_into().unwrap(),
        email: "max.mustermann@example.de".try_into().unwrap(),
    },
    subject: "Question about the course".try_into().unwrap(),
    content: "Hello World!".try_into().unwrap(),
    status: ContactMessageStatus::Pending,
    last_error: None,
    attempts: 0,
    sent_at: None,
    created_at: Utc.with_ymd_and_hms(2024, 4, 7, 10, 23, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 4, 7, 10, 23, 0).unwrap(),
});

pub static SENT: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    id: ContactMessageId::try_new(2).unwrap(),
    author: ContactMessageAuthor {
        name: "Erika Musterfrau".try_into().unwrap(),
        email: "erika@example.com".try_into().unwrap(),
    },
    subject: "Feedback".try_into().unwrap(),
    content: "Thanks for the great work!\n\nErika".try_into().unwrap(),
    status: ContactMessageStatus::Sent,
    last_error: None,
    attempts: 0,
    sent_at: Some(Utc.with_ymd_and_hms(2024, 4, 8, 8, 0, 5).unwrap()),
    created_at: Utc.with_ymd_and_hms(2024, 4, 8, 8, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 4, 8, 8, 0, 5).unwrap(),
});

pub fn new_message(message: &ContactMessage) -> NewContactMessage {
    NewContactMessage {
        author: message.author.clone(),
        subject: message.subject.clone(),
        content: message.content.clone(),
    }
}

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl ContactMessageRepository<Txn>,
) -> anyhow::Result<()> {
    for &message in &*ALL_MESSAGES {
        repo.create(txn, &new_message(message), message.created_at)
            .await?;
    }

    repo.update_status(
        txn,
        SENT.id,
        &ContactMessageStatusUpdate {
            status: ContactMessageStatus::Sent,
            last_error: None,
            updated_at: SENT.updated_at,
        },
    )
    .await?;

    Ok(())
}

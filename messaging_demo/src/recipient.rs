use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use messaging_models::recipient::{NewRecipient, Recipient, RecipientId};
use messaging_persistence_contracts::recipient::RecipientRepository;

/// All demo recipients in insertion order.
pub static ALL_RECIPIENTS: LazyLock<Vec<&Recipient>> =
    LazyLock::new(|| vec![&ADMIN, &FORMER, &SUPPORT]);

pub static ADMIN: LazyLock<Recipient> = LazyLock::new(|| Recipient {
    id: RecipientId::try_new(1).unwrap(),
    email: "admin@example.com".try_into().unwrap(),
    name: "Admin User".try_into().unwrap(),
    is_active: true,
    created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
});

pub static FORMER: LazyLock<Recipient> = LazyLock::new(|| Recipient {
    id: RecipientId::try_new(2).unwrap(),
    email: "former@example.com".try_into().unwrap(),
    name: "Former Member".try_into().unwrap(),
    is_active: false,
    created_at: Utc.with_ymd_and_hms(2024, 2, 3, 9, 15, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 2, 3, 9, 15, 0).unwrap(),
});

pub static SUPPORT: LazyLock<Recipient> = LazyLock::new(|| Recipient {
    id: RecipientId::try_new(3).unwrap(),
    email: "support@example.com".try_into().unwrap(),
    name: "Support Team".try_into().unwrap(),
    is_active: true,
    created_at: Utc.with_ymd_and_hms(2024, 3, 14, 13, 37, 42).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 3, 14, 13, 37, 42).unwrap(),
});

pub fn new_recipient(recipient: &Recipient) -> NewRecipient {
    NewRecipient {
        email: recipient.email.clone(),
        name: recipient.name.clone(),
        is_active: recipient.is_active,
    }
}

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl RecipientRepository<Txn>,
) -> anyhow::Result<()> {
    for &recipient in &*ALL_RECIPIENTS {
        repo.create(txn, &new_recipient(recipient), recipient.created_at)
            .await?;
    }

    Ok(())
}

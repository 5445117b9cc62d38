use chrono::{TimeZone, Utc};
use messaging_demo::contact::{new_message, ALL_MESSAGES, PENDING, SENT};
use messaging_models::contact::{
    ContactMessage, ContactMessageId, ContactMessageStatus, ContactMessageStatusUpdate,
};
use messaging_persistence_contracts::{contact::ContactMessageRepository, Database, Transaction};
use messaging_persistence_postgres::contact::PostgresContactMessageRepository;
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: PostgresContactMessageRepository = PostgresContactMessageRepository;

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn list_newest_first() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list(&mut txn).await.unwrap();

    assert_eq!(result, [SENT.clone(), PENDING.clone()]);
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn get() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for &message in &*ALL_MESSAGES {
        let result = REPO.get(&mut txn, message.id).await.unwrap().unwrap();
        assert_eq!(&result, message);
    }

    let result = REPO
        .get(&mut txn, ContactMessageId::try_new(42).unwrap())
        .await
        .unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn create() {
    let db = setup().await;
    let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO
        .create(&mut txn, &new_message(&PENDING), created_at)
        .await
        .unwrap();
    txn.commit().await.unwrap();

    let expected = ContactMessage {
        id: ContactMessageId::try_new(3).unwrap(),
        created_at,
        updated_at: created_at,
        ..PENDING.clone()
    };
    assert_eq!(result, expected);

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.list(&mut txn).await.unwrap();
    assert_eq!(result, [expected, SENT.clone(), PENDING.clone()]);
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn create_rollback() {
    let db = setup().await;

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &new_message(&SENT), Utc::now())
        .await
        .unwrap();
    txn.rollback().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.list(&mut txn).await.unwrap();
    assert_eq!(result.len(), ALL_MESSAGES.len());
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn update_status_failed_then_sent() {
    let db = setup().await;
    let failed_at = Utc.with_ymd_and_hms(2024, 4, 7, 10, 25, 0).unwrap();
    let sent_at = Utc.with_ymd_and_hms(2024, 4, 7, 10, 30, 0).unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let updated = REPO
        .update_status(
            &mut txn,
            PENDING.id,
            &ContactMessageStatusUpdate {
                status: ContactMessageStatus::Failed,
                last_error: Some("smtp timeout".into()),
                updated_at: failed_at,
            },
        )
        .await
        .unwrap();
    assert!(updated);

    let result = REPO.get(&mut txn, PENDING.id).await.unwrap().unwrap();
    assert_eq!(
        result,
        ContactMessage {
            status: ContactMessageStatus::Failed,
            last_error: Some("smtp timeout".into()),
            attempts: 1,
            updated_at: failed_at,
            ..PENDING.clone()
        }
    );

    REPO.update_status(
        &mut txn,
        PENDING.id,
        &ContactMessageStatusUpdate {
            status: ContactMessageStatus::Sent,
            last_error: None,
            updated_at: sent_at,
        },
    )
    .await
    .unwrap();

    let result = REPO.get(&mut txn, PENDING.id).await.unwrap().unwrap();
    assert_eq!(
        result,
        ContactMessage {
            status: ContactMessageStatus::Sent,
            last_error: Some("smtp timeout".into()),
            attempts: 1,
            sent_at: Some(sent_at),
            updated_at: sent_at,
            ..PENDING.clone()
        }
    );
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn update_status_not_found() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let updated = REPO
        .update_status(
            &mut txn,
            ContactMessageId::try_new(42).unwrap(),
            &ContactMessageStatusUpdate {
                status: ContactMessageStatus::Sent,
                last_error: None,
                updated_at: Utc::now(),
            },
        )
        .await
        .unwrap();

    assert!(!updated);
}

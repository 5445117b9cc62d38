use chrono::{TimeZone, Utc};
use messaging_demo::recipient::{new_recipient, ADMIN, ALL_RECIPIENTS, FORMER, SUPPORT};
use messaging_models::recipient::{NewRecipient, Recipient, RecipientId};
use messaging_persistence_contracts::{
    recipient::{RecipientRepoError, RecipientRepository},
    Database, Transaction,
};
use messaging_persistence_postgres::recipient::PostgresRecipientRepository;
use messaging_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::common::setup;

const REPO: PostgresRecipientRepository = PostgresRecipientRepository;

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn list() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO.list(&mut txn).await.unwrap();
    let expected = ALL_RECIPIENTS.iter().copied().cloned().collect::<Vec<_>>();
    assert_eq!(result, expected);

    let result = REPO.list_active(&mut txn).await.unwrap();
    assert_eq!(result, [ADMIN.clone(), SUPPORT.clone()]);
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn get() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    for &recipient in &*ALL_RECIPIENTS {
        let result = REPO.get(&mut txn, recipient.id).await.unwrap().unwrap();
        assert_eq!(&result, recipient);
    }

    let result = REPO
        .get(&mut txn, RecipientId::try_new(42).unwrap())
        .await
        .unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn create() {
    let db = setup().await;
    let created_at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO
        .create(
            &mut txn,
            &NewRecipient {
                email: "new@example.com".try_into().unwrap(),
                name: "New Recipient".try_into().unwrap(),
                is_active: true,
            },
            created_at,
        )
        .await
        .unwrap();
    txn.commit().await.unwrap();

    let expected = Recipient {
        id: RecipientId::try_new(4).unwrap(),
        email: "new@example.com".try_into().unwrap(),
        name: "New Recipient".try_into().unwrap(),
        is_active: true,
        created_at,
        updated_at: created_at,
    };
    assert_eq!(result, expected);

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.get(&mut txn, expected.id).await.unwrap();
    assert_eq!(result, Some(expected));
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn create_email_conflict() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let result = REPO
        .create(&mut txn, &new_recipient(&ADMIN), Utc::now())
        .await;

    assert_matches!(result, Err(RecipientRepoError::EmailConflict));
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn update() {
    let db = setup().await;
    let updated_at = Utc.with_ymd_and_hms(2024, 6, 2, 9, 30, 0).unwrap();
    let expected = Recipient {
        name: "Former Member (returned)".try_into().unwrap(),
        is_active: true,
        updated_at,
        ..FORMER.clone()
    };

    let mut txn = db.begin_transaction().await.unwrap();
    let updated = REPO.update(&mut txn, &expected).await.unwrap();
    txn.commit().await.unwrap();
    assert!(updated);

    let mut txn = db.begin_transaction().await.unwrap();
    let result = REPO.get(&mut txn, FORMER.id).await.unwrap();
    assert_eq!(result, Some(expected));
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn update_not_found() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let recipient = Recipient {
        id: RecipientId::try_new(42).unwrap(),
        ..ADMIN.clone()
    };
    let updated = REPO.update(&mut txn, &recipient).await.unwrap();

    assert!(!updated);
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn update_email_conflict() {
    let db = setup().await;
    let mut txn = db.begin_transaction().await.unwrap();

    let recipient = Recipient {
        email: SUPPORT.email.clone(),
        ..ADMIN.clone()
    };
    let result = REPO.update(&mut txn, &recipient).await;

    assert_matches!(result, Err(RecipientRepoError::EmailConflict));
}

#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn delete() {
    let db = setup().await;

    let mut txn = db.begin_transaction().await.unwrap();
    assert!(REPO.delete(&mut txn, FORMER.id).await.unwrap());
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    assert_eq!(REPO.get(&mut txn, FORMER.id).await.unwrap(), None);
    assert!(!REPO.delete(&mut txn, FORMER.id).await.unwrap());
}

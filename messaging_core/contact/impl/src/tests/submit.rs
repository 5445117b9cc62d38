use messaging_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use messaging_demo::contact::{new_message, PENDING};
use messaging_models::contact::{ContactMessageEvent, ContactMessageForm};
use messaging_persistence_contracts::{contact::MockContactMessageRepository, MockDatabase};
use messaging_queue_contracts::MockQueueService;
use messaging_shared_contracts::time::MockTimeService;
use messaging_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{
    tests::{form_for, Sut},
    ContactFeatureServiceImpl,
};

#[tokio::test]
async fn ok() {
    // Arrange
    let db = MockDatabase::build(true);
    let time = MockTimeService::new().with_now(PENDING.created_at);

    let contact_repo = MockContactMessageRepository::new().with_create(
        new_message(&PENDING),
        PENDING.created_at,
        Ok(PENDING.clone()),
    );

    let queue = MockQueueService::new().with_publish(
        ContactMessageEvent {
            message_id: PENDING.id,
        },
        Ok(()),
    );

    let sut = ContactFeatureServiceImpl {
        db,
        time,
        queue,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(form_for(&PENDING)).await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn empty_honeypot_is_not_spam() {
    // Arrange
    let db = MockDatabase::build(true);
    let time = MockTimeService::new().with_now(PENDING.created_at);

    let contact_repo = MockContactMessageRepository::new().with_create(
        new_message(&PENDING),
        PENDING.created_at,
        Ok(PENDING.clone()),
    );

    let queue = MockQueueService::new().with_publish(
        ContactMessageEvent {
            message_id: PENDING.id,
        },
        Ok(()),
    );

    let sut = ContactFeatureServiceImpl {
        db,
        time,
        queue,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut
        .submit(ContactMessageForm {
            honeypot: Some(String::new()),
            ..form_for(&PENDING)
        })
        .await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn spam() {
    // Arrange
    let sut = Sut::default();

    // Act
    let result = sut
        .submit(ContactMessageForm {
            honeypot: Some("http://spam.example".into()),
            ..form_for(&PENDING)
        })
        .await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn invalid_spam_is_still_rejected() {
    // Arrange
    let sut = Sut::default();

    // Act
    let result = sut
        .submit(ContactMessageForm {
            email: "not-an-email".into(),
            honeypot: Some("bot".into()),
            ..form_for(&PENDING)
        })
        .await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Validation(_)));
}

#[tokio::test]
async fn validation_error() {
    // Arrange
    let sut = Sut::default();

    // Act
    let result = sut
        .submit(ContactMessageForm {
            name: String::new(),
            email: "invalid".into(),
            subject: "x".repeat(501),
            message: String::new(),
            honeypot: None,
        })
        .await;

    // Assert
    let Err(ContactSubmitError::Validation(err)) = result else {
        panic!("expected validation error, got {result:?}");
    };
    assert_eq!(
        err.fields().collect::<Vec<_>>(),
        ["name", "email", "subject", "message"]
    );
}

#[tokio::test]
async fn persistence_error() {
    // Arrange
    let db = MockDatabase::build(false);
    let time = MockTimeService::new().with_now(PENDING.created_at);

    let contact_repo = MockContactMessageRepository::new().with_create(
        new_message(&PENDING),
        PENDING.created_at,
        Err(anyhow::anyhow!("connection reset")),
    );

    let sut = ContactFeatureServiceImpl {
        db,
        time,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(form_for(&PENDING)).await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Other(_)));
}

#[tokio::test]
async fn publish_error_is_ignored() {
    // Arrange
    let db = MockDatabase::build(true);
    let time = MockTimeService::new().with_now(PENDING.created_at);

    let contact_repo = MockContactMessageRepository::new().with_create(
        new_message(&PENDING),
        PENDING.created_at,
        Ok(PENDING.clone()),
    );

    let queue = MockQueueService::new().with_publish(
        ContactMessageEvent {
            message_id: PENDING.id,
        },
        Err(anyhow::anyhow!("queue unavailable")),
    );

    let sut = ContactFeatureServiceImpl {
        db,
        time,
        queue,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.submit(form_for(&PENDING)).await;

    // Assert
    result.unwrap();
}

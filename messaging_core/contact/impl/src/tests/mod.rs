use messaging_auth_contracts::MockAuthService;
use messaging_models::contact::{ContactMessage, ContactMessageForm};
use messaging_persistence_contracts::{
    contact::MockContactMessageRepository, MockDatabase, MockTransaction,
};
use messaging_queue_contracts::MockQueueService;
use messaging_shared_contracts::time::MockTimeService;

use crate::ContactFeatureServiceImpl;

mod submit;

type Sut = ContactFeatureServiceImpl<
    MockDatabase,
    MockAuthService,
    MockTimeService,
    MockQueueService,
    MockContactMessageRepository<MockTransaction>,
>;

fn form_for(message: &ContactMessage) -> ContactMessageForm {
    ContactMessageForm {
        name: message.author.name.to_string(),
        email: message.author.email.to_string(),
        subject: message.subject.to_string(),
        message: message.content.to_string(),
        honeypot: None,
    }
}

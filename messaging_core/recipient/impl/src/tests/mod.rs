use std::time::Duration;

use messaging_auth_contracts::{Authentication, MockAuthService};
use messaging_persistence_contracts::{
    recipient::MockRecipientRepository, MockDatabase, MockTransaction,
};
use messaging_shared_contracts::time::MockTimeService;

use crate::RecipientFeatureServiceImpl;


type Sut = RecipientFeatureServiceImpl<
    MockDatabase,
    MockAuthService,
    MockTimeService,
    MockRecipientRepository<MockTransaction>,
>;

fn admin_auth() -> MockAuthService {
    MockAuthService::new().with_authenticate(
        "token",
        Ok(Authentication {
            subject: "admin".into(),
            ttl: Duration::from_secs(3600),
        }),
    )
}

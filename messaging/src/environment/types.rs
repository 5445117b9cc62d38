use messaging_auth_impl::AuthServiceImpl;
use messaging_core_contact_impl::ContactFeatureServiceImpl;
use messaging_core_health_impl::HealthFeatureServiceImpl;
use messaging_core_recipient_impl::RecipientFeatureServiceImpl;
use messaging_persistence_postgres::{
    contact::PostgresContactMessageRepository, recipient::PostgresRecipientRepository,
    PostgresDatabase,
};
use messaging_queue_valkey::ValkeyQueue;
use messaging_shared_impl::{jwt::JwtServiceImpl, time::TimeServiceImpl};

// API
pub type RestServer =
    messaging_api_rest::RestServer<HealthFeature, ContactFeature, RecipientFeature, Auth>;

// Persistence
pub type Database = PostgresDatabase;
pub type ContactRepo = PostgresContactMessageRepository;
pub type RecipientRepo = PostgresRecipientRepository;

// Queue
pub type Queue = ValkeyQueue;

// Shared
pub type Jwt = JwtServiceImpl<Time>;
pub type Time = TimeServiceImpl;

// Auth
pub type Auth = AuthServiceImpl<Jwt>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Database, Auth, Time, Queue, ContactRepo>;
pub type HealthFeature = HealthFeatureServiceImpl<Time, Database, Queue>;
pub type RecipientFeature = RecipientFeatureServiceImpl<Database, Auth, Time, RecipientRepo>;

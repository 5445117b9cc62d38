pub mod auth;
pub mod id;
pub mod json;
pub mod query;

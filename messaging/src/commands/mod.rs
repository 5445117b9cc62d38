pub mod jwt;
pub mod message;
pub mod migrate;
pub mod serve;

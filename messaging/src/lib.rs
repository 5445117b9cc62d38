pub mod commands;
pub mod database;
pub mod environment;
pub mod queue;

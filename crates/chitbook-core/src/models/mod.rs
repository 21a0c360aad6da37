//! Data models: transaction records and configuration.

pub mod config;
pub mod record;

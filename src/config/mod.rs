//! Configuration: config.toml bot settings and database connection.

/// Bot configuration loading from config.toml
pub mod app;

/// Database configuration and connection management
pub mod database;

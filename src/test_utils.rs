//! Shared test utilities.
//!
//! Helpers for setting up an in-memory database and a predictable bot configuration.

use crate::{config::app::BotConfig, errors::Result};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Bot configuration with the built-in defaults.
#[must_use]
pub fn test_bot_config() -> BotConfig {
    BotConfig::default()
}

//! Unified error type for the calculation core, storage and the Discord layer.

use poise::serenity_prelude as serenity;
use thiserror::Error;

/// Every failure the crate can report.
///
/// The first group are input-validation failures raised by the calculation core;
/// their messages are shown to Discord users verbatim.
#[derive(Debug, Error)]
pub enum Error {
    /// Input matched neither the suffix notation nor a plain number.
    #[error(
        "Invalid number format: '{input}'. Use formats like 1234, 12.5, 1.5K, 2.3M, 4.7B, 1.2AA"
    )]
    InvalidNumberFormat {
        /// The rejected input
        input: String,
    },

    /// Suffix is not present in the notation table.
    #[error("Invalid notation: '{notation}'")]
    InvalidNotation {
        /// The unknown suffix
        notation: String,
    },

    /// Tier token is not `<number>` or `<number>+`.
    #[error("Invalid tier format: '{input}'. Use a tier number like 5, or 5+ for tournament")]
    InvalidTierFormat {
        /// The rejected token
        input: String,
    },

    /// Tournament flag used on a tier that has no tournament.
    #[error("Invalid tournament tier: {tier}+. Valid tournament tiers are 1+, 3+, 5+, 8+, 11+, 14+")]
    InvalidTournamentTier {
        /// The requested tier
        tier: u32,
    },

    /// Normal tier outside 1-18.
    #[error("Invalid tier: {tier}. Tier must be between 1 and 18")]
    InvalidTierRange {
        /// The requested tier
        tier: u32,
    },

    /// Wave table bounds that cannot produce a table.
    #[error("Invalid wave range: {message}")]
    InvalidWaveRange {
        /// What was wrong with the range
        message: String,
    },

    /// Configuration file or setting problem.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Storage failure from `SeaORM`.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Missing or unreadable environment variable.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Failure while writing a reply into a buffer.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error.
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<serenity::Error>),
}

impl From<serenity::Error> for Error {
    fn from(value: serenity::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

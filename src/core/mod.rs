//! Core logic - framework-agnostic enemy stat calculations and user settings.

/// Overall tier difficulty, stat exponents and damage divisor
pub mod difficulty;
/// Enemy health and damage at a wave and tier
pub mod enemy;
/// Suffix notation parsing and formatting (K, M, B ... AJ)
pub mod notation;
/// Wave tables and tier summaries
pub mod report;
/// Per-user preferences stored in the database
pub mod settings;
/// Tier token parsing and validation
pub mod tier;
/// Wave threshold bonuses for health and damage
pub mod wave;

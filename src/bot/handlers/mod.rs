//! Discord interaction handlers

/// Autocomplete handlers for tier tokens
pub mod autocomplete;

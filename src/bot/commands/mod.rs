//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// General utility commands
pub mod general;

/// Per-user settings commands
pub mod settings;

/// Enemy stat commands
pub mod stats;

// Export commands
pub use general::*;
pub use settings::*;
pub use stats::*;

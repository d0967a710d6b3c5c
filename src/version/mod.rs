//! Host version handling
//!
//! # Modules
//!
//! - [`parser`]: Parses host version strings into comparable [`Version`] values
//! - [`predicate`]: Version gates attached to probe checks
//! - [`error`]: Error types for parsing versions and gates

pub mod error;
pub mod parser;
pub mod predicate;

pub use parser::{Version, parse, parse_host_version};
pub use predicate::VersionPredicate;

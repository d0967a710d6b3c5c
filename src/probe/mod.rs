//! Probe layer deciding pass, fail or skip for each configured check
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Runner    │◀────│   Version   │
//! │  (snapshot) │     │ (classify)  │     │   (gate)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │   Matcher   │
//!                     │ (by policy) │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`check`]: Checks, outcomes and per-check results
//! - [`matcher`]: Match policies and lookup over a registry listing
//! - [`runner`]: Evaluates checks against one registry snapshot
//! - [`report`]: Renders results for operators
//! - [`error`]: Structural registry errors

pub mod check;
pub mod error;
pub mod matcher;
pub mod report;
pub mod runner;

pub use check::{Check, Outcome, ProbeReport, ProbeResult};
pub use error::MalformedRegistryError;
pub use matcher::MatchPolicy;
pub use runner::ProbeRunner;

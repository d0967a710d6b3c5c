//! Extension registry access
//!
//! The host owns and populates its extension lists; this layer only reads them.
//!
//! # Modules
//!
//! - [`client`]: Trait for querying registered implementations of a capability
//! - [`snapshot`]: In-memory registry loaded from a JSON dump of a running host
//! - [`types`]: Extension descriptors and capability tags
//! - [`error`]: Error types for loading registry snapshots

pub mod client;
pub mod error;
pub mod snapshot;
pub mod types;

pub use client::ExtensionRegistry;
pub use snapshot::SnapshotRegistry;
pub use types::{CapabilityTag, ExtensionDescriptor};

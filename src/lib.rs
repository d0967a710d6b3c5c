//! Compatibility probe for provisioning strategy extensions
//!
//! Reads the implementations a host has registered for an extension point,
//! parses the host version, and classifies each configured check as pass,
//! fail or skip.
//!
//! # Modules
//!
//! - [`config`]: Probe configuration and the default checks
//! - [`probe`]: Matching and classification of checks
//! - [`registry`]: Access to the host's extension listings
//! - [`version`]: Host version parsing and version gates

pub mod config;
pub mod probe;
pub mod registry;
pub mod version;

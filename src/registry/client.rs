//! Registry trait for listing registered extensions

#[cfg(test)]
use mockall::automock;

use crate::registry::types::{CapabilityTag, ExtensionDescriptor};

/// Trait for querying the extensions a host has registered
#[cfg_attr(test, automock)]
pub trait ExtensionRegistry {
    /// Lists all implementations currently registered for a capability
    ///
    /// # Returns
    /// Descriptors in registry order. An empty list is a valid answer here;
    /// interpreting it is up to the caller.
    fn list(&self, capability: &CapabilityTag) -> Vec<ExtensionDescriptor>;
}

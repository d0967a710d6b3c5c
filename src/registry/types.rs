//! Common types for registry listings

use std::fmt;

use serde::{Deserialize, Serialize};

/// Extension point of the provisioning strategies in the host
pub const PROVISIONER_STRATEGY: &str = "hudson.slaves.NodeProvisioner$Strategy";

/// Name of an extension point (e.g., "hudson.slaves.NodeProvisioner$Strategy")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityTag(String);

impl CapabilityTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The provisioning strategy extension point
    pub fn provisioner_strategy() -> Self {
        Self::new(PROVISIONER_STRATEGY)
    }
}

impl fmt::Display for CapabilityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of one registered extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionDescriptor {
    /// Unqualified implementation name (e.g., "StandardStrategyImpl")
    pub simple_name: String,
    /// Fully qualified implementation name
    #[serde(default)]
    pub qualified_name: String,
    /// Stable capability markers attached by the host, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<String>,
}

impl ExtensionDescriptor {
    pub fn new(simple_name: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
            qualified_name: qualified_name.into(),
            markers: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }
}

impl fmt::Display for ExtensionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.qualified_name.is_empty() {
            f.write_str(&self.simple_name)
        } else {
            write!(f, "{} ({})", self.simple_name, self.qualified_name)
        }
    }
}

//! In-memory registry built from a dump of a running host
//!
//! Snapshot format:
//!
//! ```json
//! {
//!   "hostVersion": "2.530-SNAPSHOT",
//!   "extensions": {
//!     "hudson.slaves.NodeProvisioner$Strategy": [
//!       { "simpleName": "StandardStrategyImpl", "qualifiedName": "..." }
//!     ]
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::registry::client::ExtensionRegistry;
use crate::registry::error::SnapshotError;
use crate::registry::types::{CapabilityTag, ExtensionDescriptor};

/// Registry answering queries from a fixed set of extension lists
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapshotRegistry {
    host_version: Option<String>,
    extensions: HashMap<CapabilityTag, Vec<ExtensionDescriptor>>,
}

impl SnapshotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the extensions registered for a capability
    pub fn with_extensions(
        mut self,
        capability: CapabilityTag,
        extensions: Vec<ExtensionDescriptor>,
    ) -> Self {
        self.extensions.insert(capability, extensions);
        self
    }

    pub fn with_host_version(mut self, host_version: impl Into<String>) -> Self {
        self.host_version = Some(host_version.into());
        self
    }

    /// Host version recorded in the snapshot, unparsed
    pub fn host_version(&self) -> Option<&str> {
        self.host_version.as_deref()
    }

    pub fn from_json_str(content: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(content)?;
        debug!(
            "Loaded snapshot with {} capabilities, host version {:?}",
            snapshot.extensions.len(),
            snapshot.host_version
        );
        Ok(snapshot)
    }

    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

impl ExtensionRegistry for SnapshotRegistry {
    fn list(&self, capability: &CapabilityTag) -> Vec<ExtensionDescriptor> {
        self.extensions.get(capability).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SNAPSHOT: &str = r#"{
        "hostVersion": "2.530-SNAPSHOT",
        "extensions": {
            "hudson.slaves.NodeProvisioner$Strategy": [
                {
                    "simpleName": "StandardStrategyImpl",
                    "qualifiedName": "hudson.slaves.NodeProvisioner$StandardStrategyImpl"
                },
                {
                    "simpleName": "NoDelayProvisionerStrategy",
                    "qualifiedName": "hudson.plugins.ec2.NoDelayProvisionerStrategy"
                }
            ]
        }
    }"#;

    #[test]
    fn from_json_str_lists_extensions_in_order() {
        let registry = SnapshotRegistry::from_json_str(SNAPSHOT).unwrap();

        let names: Vec<String> = registry
            .list(&CapabilityTag::provisioner_strategy())
            .into_iter()
            .map(|d| d.simple_name)
            .collect();

        assert_eq!(
            names,
            vec!["StandardStrategyImpl", "NoDelayProvisionerStrategy"]
        );
        assert_eq!(registry.host_version(), Some("2.530-SNAPSHOT"));
    }

    #[test]
    fn list_returns_empty_for_unknown_capability() {
        let registry = SnapshotRegistry::from_json_str(SNAPSHOT).unwrap();

        assert!(registry.list(&CapabilityTag::new("hudson.model.Cloud")).is_empty());
    }

    #[test]
    fn from_json_str_accepts_empty_object() {
        let registry = SnapshotRegistry::from_json_str("{}").unwrap();

        assert_eq!(registry, SnapshotRegistry::new());
        assert_eq!(registry.host_version(), None);
    }

    #[test]
    fn from_json_str_rejects_malformed_json() {
        let result = SnapshotRegistry::from_json_str("{ \"extensions\": [");

        assert!(matches!(result, Err(SnapshotError::Json(_))));
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let registry = SnapshotRegistry::from_path(file.path()).unwrap();

        assert_eq!(registry.list(&CapabilityTag::provisioner_strategy()).len(), 2);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = SnapshotRegistry::from_path(&dir.path().join("missing.json"));

        assert!(matches!(result, Err(SnapshotError::Io(_))));
    }

    #[test]
    fn with_extensions_builds_registry_in_memory() {
        let registry = SnapshotRegistry::new()
            .with_host_version("2.400")
            .with_extensions(
                CapabilityTag::provisioner_strategy(),
                vec![ExtensionDescriptor::new("StandardStrategyImpl", "")],
            );

        assert_eq!(
            registry.list(&CapabilityTag::provisioner_strategy()),
            vec![ExtensionDescriptor::new("StandardStrategyImpl", "")]
        );
        assert_eq!(registry.host_version(), Some("2.400"));
    }
}

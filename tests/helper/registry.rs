//! Registry test utilities

#![allow(dead_code)]

use std::cell::Cell;
use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use strategy_probe::registry::{CapabilityTag, ExtensionDescriptor, ExtensionRegistry};

/// Registry answering with a fixed listing and counting how often it is queried
pub struct CountingRegistry {
    extensions: Vec<ExtensionDescriptor>,
    calls: Cell<usize>,
}

impl CountingRegistry {
    pub fn new(extensions: Vec<ExtensionDescriptor>) -> Self {
        Self {
            extensions,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ExtensionRegistry for CountingRegistry {
    fn list(&self, _capability: &CapabilityTag) -> Vec<ExtensionDescriptor> {
        self.calls.set(self.calls.get() + 1);
        self.extensions.clone()
    }
}

pub fn standard() -> ExtensionDescriptor {
    ExtensionDescriptor::new(
        "StandardStrategyImpl",
        "hudson.slaves.NodeProvisioner$StandardStrategyImpl",
    )
}

pub fn no_delay() -> ExtensionDescriptor {
    ExtensionDescriptor::new(
        "NoDelayProvisionerStrategy",
        "hudson.plugins.ec2.NoDelayProvisionerStrategy",
    )
}

pub fn node_delay() -> ExtensionDescriptor {
    ExtensionDescriptor::new(
        "NodeDelayProvisionerStrategy",
        "hudson.slaves.NodeDelayProvisionerStrategy",
    )
}

/// Write a snapshot listing `extensions` under the provisioner strategy capability
pub fn write_snapshot(
    host_version: Option<&str>,
    extensions: &[ExtensionDescriptor],
) -> NamedTempFile {
    let capability = CapabilityTag::provisioner_strategy();
    let mut snapshot = json!({
        "extensions": {
            (capability.as_str()): extensions,
        }
    });
    if let Some(version) = host_version {
        snapshot["hostVersion"] = json!(version);
    }

    write_json(&snapshot)
}

/// Write arbitrary JSON (snapshot or config) to a temporary file
pub fn write_json(value: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(value.to_string().as_bytes()).unwrap();
    file
}

pub fn strategies(names: &[&str]) -> Vec<ExtensionDescriptor> {
    names
        .iter()
        .map(|name| ExtensionDescriptor::new(*name, format!("org.example.{name}")))
        .collect()
}

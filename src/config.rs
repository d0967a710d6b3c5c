use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::probe::check::Check;
use crate::probe::matcher::MatchPolicy;
use crate::probe::runner::{DEFAULT_MIN_EXTENSIONS, ProbeRunner};
use crate::registry::types::{CapabilityTag, PROVISIONER_STRATEGY};
use crate::version::predicate::VersionPredicate;

// =============================================================================
// Default checks
// =============================================================================

/// Host release that introduced the node-delay provisioning strategy
pub const NODE_DELAY_SINCE: (u64, u64) = (2, 530);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Probe configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ProbeConfig {
    /// Extension point whose implementations are probed
    pub capability: CapabilityTag,
    /// Minimum number of registered extensions for a well-formed listing
    pub min_extensions: usize,
    pub checks: Vec<Check>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            capability: CapabilityTag::new(PROVISIONER_STRATEGY),
            min_extensions: DEFAULT_MIN_EXTENSIONS,
            checks: default_checks(),
        }
    }
}

impl ProbeConfig {
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Runner configured with this file's structural expectations
    pub fn runner(&self) -> ProbeRunner {
        ProbeRunner::new().with_min_extensions(self.min_extensions)
    }
}

/// Baseline standard strategy, the no-delay strategy, and the node-delay
/// strategy gated on the host release that ships it.
pub fn default_checks() -> Vec<Check> {
    let (major, minor) = NODE_DELAY_SINCE;
    vec![
        Check::new("standard", MatchPolicy::Contains("Standard".to_string())),
        Check::new(
            "no-delay",
            MatchPolicy::Exact("NoDelayProvisionerStrategy".to_string()),
        ),
        Check::new(
            "node-delay",
            MatchPolicy::Exact("NodeDelayProvisionerStrategy".to_string()),
        )
        .gated(VersionPredicate::at_least(major, minor)),
    ]
}

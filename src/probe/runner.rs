//! Evaluates checks against a single registry snapshot

use tracing::{debug, info, warn};

use crate::probe::check::{Check, ProbeReport, ProbeResult};
use crate::probe::error::MalformedRegistryError;
use crate::probe::matcher;
use crate::registry::client::ExtensionRegistry;
use crate::registry::types::{CapabilityTag, ExtensionDescriptor};
use crate::version::parser::{Version, parse_host_version};

/// Default lower bound on the number of registered extensions
///
/// Only an empty listing is malformed by default. A host shipping the standard
/// strategy alone is reported through the failing `no-delay` check instead;
/// set `minExtensions` to 2 to treat it as a broken registry.
pub const DEFAULT_MIN_EXTENSIONS: usize = 1;

/// Classifies each check as pass, fail or skip
///
/// Runs are stateless: the runner only holds the structural expectations on
/// the registry listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeRunner {
    min_extensions: usize,
}

impl Default for ProbeRunner {
    fn default() -> Self {
        Self {
            min_extensions: DEFAULT_MIN_EXTENSIONS,
        }
    }
}

impl ProbeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `min` registered extensions. Values below one are raised
    /// to one since an empty listing is always malformed.
    pub fn with_min_extensions(mut self, min: usize) -> Self {
        self.min_extensions = min.max(DEFAULT_MIN_EXTENSIONS);
        self
    }

    /// Query the registry once, parse the host version, and run all checks
    /// against that snapshot.
    pub fn probe<R: ExtensionRegistry + ?Sized>(
        &self,
        registry: &R,
        capability: &CapabilityTag,
        checks: &[Check],
        raw_host_version: Option<&str>,
    ) -> Result<ProbeReport, MalformedRegistryError> {
        let view = registry.list(capability);
        debug!(
            "Registry lists {} extensions for {}",
            view.len(),
            capability
        );
        let host_version = parse_host_version(raw_host_version);
        self.run(checks, &view, host_version.as_ref())
    }

    /// Evaluate every check against `view`, in order.
    ///
    /// A structurally invalid view is reported as an error before any check runs.
    /// Failing checks never stop the remaining ones.
    pub fn run(
        &self,
        checks: &[Check],
        view: &[ExtensionDescriptor],
        host_version: Option<&Version>,
    ) -> Result<ProbeReport, MalformedRegistryError> {
        self.validate(view)?;

        let results = checks
            .iter()
            .map(|check| evaluate(check, view, host_version))
            .collect();

        Ok(ProbeReport { results })
    }

    fn validate(&self, view: &[ExtensionDescriptor]) -> Result<(), MalformedRegistryError> {
        if view.is_empty() {
            return Err(MalformedRegistryError::Empty);
        }
        if let Some((index, descriptor)) = view
            .iter()
            .enumerate()
            .find(|(_, d)| d.simple_name.trim().is_empty())
        {
            return Err(MalformedRegistryError::BlankName {
                index,
                qualified_name: descriptor.qualified_name.clone(),
            });
        }
        if view.len() < self.min_extensions {
            return Err(MalformedRegistryError::TooFew {
                expected: self.min_extensions,
                found: view.len(),
            });
        }
        Ok(())
    }
}

fn evaluate(
    check: &Check,
    view: &[ExtensionDescriptor],
    host_version: Option<&Version>,
) -> ProbeResult {
    if let Some(gate) = check.gate.filter(|g| !g.is_satisfied_by(host_version)) {
        info!(
            "Skipping {}: host version {} does not satisfy {}",
            check.label,
            describe_host(host_version),
            gate
        );
        return ProbeResult::skipped(&check.label);
    }

    match matcher::find(view, &check.policy) {
        Some(found) => {
            info!("{} available: {}", check.label, found);
            ProbeResult::passed(&check.label, found.clone())
        }
        None => {
            warn!(
                "{} missing: no {} among {} registered extensions",
                check.label,
                check.policy,
                view.len()
            );
            ProbeResult::failed(&check.label, check.policy.clone(), view.to_vec())
        }
    }
}

/// Numeric core of the host version as compared against gates
fn describe_host(host_version: Option<&Version>) -> String {
    host_version.map_or_else(
        || "unknown".to_string(),
        |v| format!("{}.{}", v.major, v.minor),
    )
}

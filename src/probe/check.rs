//! Checks and their results

use serde::{Deserialize, Serialize};

use crate::probe::matcher::MatchPolicy;
use crate::registry::types::ExtensionDescriptor;
use crate::version::predicate::VersionPredicate;

/// A named requirement on the registry
///
/// With a gate, the check only applies when the host version satisfies it and
/// is skipped otherwise. Without a gate, an absent extension always fails.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Check {
    pub label: String,
    pub policy: MatchPolicy,
    #[serde(default)]
    pub gate: Option<VersionPredicate>,
}

impl Check {
    pub fn new(label: impl Into<String>, policy: MatchPolicy) -> Self {
        Self {
            label: label.into(),
            policy,
            gate: None,
        }
    }

    pub fn gated(mut self, gate: VersionPredicate) -> Self {
        self.gate = Some(gate);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Skip,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
            Outcome::Skip => "SKIP",
        }
    }
}

/// Result of evaluating one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub label: String,
    pub outcome: Outcome,
    /// Descriptor satisfying the check (Pass only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<ExtensionDescriptor>,
    /// Full registry listing at probe time (Fail only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub observed: Vec<ExtensionDescriptor>,
    /// What the check was looking for (Fail only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<MatchPolicy>,
}

impl ProbeResult {
    pub fn passed(label: &str, matched: ExtensionDescriptor) -> Self {
        Self {
            label: label.to_string(),
            outcome: Outcome::Pass,
            matched: Some(matched),
            observed: Vec::new(),
            expected: None,
        }
    }

    pub fn failed(label: &str, expected: MatchPolicy, observed: Vec<ExtensionDescriptor>) -> Self {
        Self {
            label: label.to_string(),
            outcome: Outcome::Fail,
            matched: None,
            observed,
            expected: Some(expected),
        }
    }

    pub fn skipped(label: &str) -> Self {
        Self {
            label: label.to_string(),
            outcome: Outcome::Skip,
            matched: None,
            observed: Vec::new(),
            expected: None,
        }
    }
}

/// Results of one probe run, in check order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub results: Vec<ProbeResult>,
}

impl ProbeReport {
    /// A run succeeds unless some check failed; skips never count as failures
    pub fn is_success(&self) -> bool {
        !self.results.iter().any(|r| r.outcome == Outcome::Fail)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ProbeResult> {
        self.with_outcome(Outcome::Fail)
    }

    pub fn with_outcome(&self, outcome: Outcome) -> impl Iterator<Item = &ProbeResult> {
        self.results.iter().filter(move |r| r.outcome == outcome)
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.with_outcome(outcome).count()
    }
}

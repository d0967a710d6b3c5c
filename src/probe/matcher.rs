//! Matching registered extensions against a required strategy
//!
//! Baseline strategies are matched by substring, a specific strategy under
//! test by exact simple name. `Marker` matches a tag attached by the host
//! instead of a class name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::registry::types::ExtensionDescriptor;

/// How a required strategy is identified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchPolicy {
    /// Simple name equals the given name
    Exact(String),
    /// Simple name contains the given substring (case-sensitive)
    Contains(String),
    /// Descriptor carries the given marker
    Marker(String),
}

impl MatchPolicy {
    pub fn matches(&self, descriptor: &ExtensionDescriptor) -> bool {
        match self {
            MatchPolicy::Exact(name) => descriptor.simple_name == *name,
            MatchPolicy::Contains(substring) => descriptor.simple_name.contains(substring.as_str()),
            MatchPolicy::Marker(tag) => descriptor.markers.iter().any(|m| m == tag),
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPolicy::Exact(name) => write!(f, "extension named {name:?}"),
            MatchPolicy::Contains(substring) => {
                write!(f, "extension name containing {substring:?}")
            }
            MatchPolicy::Marker(tag) => write!(f, "extension marked {tag:?}"),
        }
    }
}

/// Returns the first descriptor satisfying the policy, in registry order
pub fn find<'a>(
    descriptors: &'a [ExtensionDescriptor],
    policy: &MatchPolicy,
) -> Option<&'a ExtensionDescriptor> {
    descriptors.iter().find(|d| policy.matches(d))
}

/// Returns every descriptor satisfying the policy, in registry order
pub fn find_all<'a>(
    descriptors: &'a [ExtensionDescriptor],
    policy: &MatchPolicy,
) -> Vec<&'a ExtensionDescriptor> {
    descriptors.iter().filter(|d| policy.matches(d)).collect()
}

//! Version gates for probe checks

use std::fmt;

use serde::Deserialize;

use crate::version::error::PredicateError;
use crate::version::parser::{Version, parse};

/// A condition on the host version deciding whether a check applies at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPredicate")]
pub enum VersionPredicate {
    /// Host `(major, minor)` must be at least the given pair
    AtLeast { major: u64, minor: u64 },
}

impl VersionPredicate {
    pub fn at_least(major: u64, minor: u64) -> Self {
        VersionPredicate::AtLeast { major, minor }
    }

    /// An absent host version never satisfies a predicate
    pub fn is_satisfied_by(&self, host_version: Option<&Version>) -> bool {
        let Some(version) = host_version else {
            return false;
        };
        match *self {
            VersionPredicate::AtLeast { major, minor } => version.is_at_least(major, minor),
        }
    }
}

impl fmt::Display for VersionPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionPredicate::AtLeast { major, minor } => write!(f, ">= {major}.{minor}"),
        }
    }
}

/// Configuration form: `{"atLeast": "2.530"}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
enum RawPredicate {
    AtLeast(String),
}

impl TryFrom<RawPredicate> for VersionPredicate {
    type Error = PredicateError;

    fn try_from(raw: RawPredicate) -> Result<Self, Self::Error> {
        match raw {
            RawPredicate::AtLeast(bound) => {
                let version = parse(&bound)?;
                if version.qualifier.is_some() {
                    return Err(PredicateError::QualifiedBound(bound));
                }
                Ok(VersionPredicate::at_least(version.major, version.minor))
            }
        }
    }
}

//! Host version parsing
//!
//! Host versions look like `2.530`, `2.530.1` or `2.530-SNAPSHOT`. Only the
//! leading `major.minor` pair takes part in comparisons; anything after it is
//! kept as an informational qualifier.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::version::error::ParseError;

/// A parsed host version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    /// Trailing text after the minor segment (e.g. "SNAPSHOT"), ignored for comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
}

impl Version {
    pub fn new(major: u64, minor: u64) -> Self {
        Self {
            major,
            minor,
            qualifier: None,
        }
    }

    /// The `(major, minor)` pair used for ordering
    pub fn numeric(&self) -> (u64, u64) {
        (self.major, self.minor)
    }

    /// Returns true if `(major, minor)` of this version is greater than or equal
    /// to the given pair. The qualifier never participates.
    pub fn is_at_least(&self, major: u64, minor: u64) -> bool {
        self.numeric() >= (major, minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(qualifier) = &self.qualifier {
            write!(f, "-{qualifier}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse a version string into a [`Version`].
///
/// Segments are separated by `.` or `-`. The first two must be non-negative
/// integers; the remainder (without its leading separator) becomes the qualifier.
///
/// Examples:
/// - "2.530" -> Version(2, 530)
/// - "2.530-SNAPSHOT" -> Version(2, 530, "SNAPSHOT")
/// - "2.530.1" -> Version(2, 530, "1")
pub fn parse(raw: &str) -> Result<Version, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ParseError::Empty);
    }

    let (major, rest) = split_segment(raw);
    let major = parse_number(major)?;

    let Some(rest) = rest.filter(|r| !r.is_empty()) else {
        return Err(ParseError::MissingMinor(raw.to_string()));
    };

    let (minor, rest) = split_segment(rest);
    let minor = parse_number(minor)?;

    let qualifier = rest.filter(|r| !r.is_empty()).map(str::to_string);

    Ok(Version {
        major,
        minor,
        qualifier,
    })
}

/// Parse an optional host version, treating a parse failure as an absent version.
///
/// An unparseable version (e.g. a local development build) is a legitimate
/// operating condition, so the error is only logged.
pub fn parse_host_version(raw: Option<&str>) -> Option<Version> {
    let raw = raw?;
    parse(raw)
        .inspect_err(|e| warn!("Ignoring unparseable host version {:?}: {}", raw, e))
        .ok()
}

/// Split off the first segment, returning the text after the separator if any
fn split_segment(s: &str) -> (&str, Option<&str>) {
    match s.find(['.', '-']) {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    }
}

fn parse_number(segment: &str) -> Result<u64, ParseError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidSegment(segment.to_string()));
    }
    segment
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidSegment(segment.to_string()))
}

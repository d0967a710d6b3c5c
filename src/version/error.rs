use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty version string")]
    Empty,

    #[error("Missing minor segment in {0:?}")]
    MissingMinor(String),

    #[error("Invalid numeric segment {0:?}")]
    InvalidSegment(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    #[error("Invalid version bound: {0}")]
    InvalidBound(#[from] ParseError),

    #[error("Version bound {0:?} must not carry a qualifier")]
    QualifiedBound(String),
}

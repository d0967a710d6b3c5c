use thiserror::Error;

/// The registry listing itself is unusable, independent of any check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRegistryError {
    #[error("Registry returned no extensions")]
    Empty,

    #[error("Expected at least {expected} registered extensions, found {found}")]
    TooFew { expected: usize, found: usize },

    #[error("Extension at index {index} ({qualified_name:?}) has an empty simple name")]
    BlankName {
        index: usize,
        qualified_name: String,
    },
}

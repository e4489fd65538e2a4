//! Error definitions.
use thiserror::Error;

/// Project-wise error type.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChainMapError {
    /// Occurs during construction of a hash table when the requested bucket count is zero.
    /// A table must own at least one bucket for the bucket-index arithmetic to be defined.
    #[error("A hash table must have at least one bucket.")]
    InvalidCapacity,
}

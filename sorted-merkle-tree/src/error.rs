use thiserror::Error;

use crate::Node;

/// Alias for `core::result::Result<T, MerkleTreeError>`.
pub type Result<T> = core::result::Result<T, MerkleTreeError>;

/// Errors from Merkle tree operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MerkleTreeError {
    /// `build` was called without any leaves.
    #[error("no leaves provided")]
    EmptyInput,
    /// The tree was queried before a successful `build`.
    #[error("merkle tree has not been built")]
    NotBuilt,
    /// A value could not be interpreted (malformed hex, corrupt encoding).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The same leaf content appeared twice while duplicates are rejected.
    #[error("duplicate leaf {leaf} at index {index}")]
    DuplicateLeaf {
        /// Position of the second occurrence in the input.
        index: usize,
        /// The repeated leaf.
        leaf: Node,
    },
}

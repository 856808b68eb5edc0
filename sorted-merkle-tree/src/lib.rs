//! Build-once binary Merkle tree using Blake3.
//!
//! Leaves are combined pairwise, level by level, until a single root remains.
//! Pair hashing sorts its two inputs before hashing:
//!
//! `parent = blake3(min(a, b) || max(a, b))`
//!
//! so a parent does not depend on the left/right position of its children.
//! Proofs therefore carry only sibling values, and verification folds a leaf
//! with each sibling in turn.
//!
//! An odd node at the end of a level is carried to the next level unchanged
//! (not rehashed) and pairs up once a partner is available.
//!
//! # Core types
//!
//! - [`MerkleTree`] — builds the tree and answers root, depth and proof
//!   queries.
//! - [`MerkleProof`] — a leaf with its sibling path; verifiable and
//!   bincode-encodable.
//! - [`Node`] — an opaque byte string stored in the tree (leaf or digest).
//! - [`MerkleTreeOptions`] — leaf hashing and duplicate handling.

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
mod node;
mod options;
pub(crate) mod proof;
pub(crate) mod tree;
mod verify;


pub use error::{MerkleTreeError, Result};
pub use hash::{HASH_LENGTH, Hash, hash_pair, hash_value};
pub use node::Node;
pub use options::MerkleTreeOptions;
pub use proof::MerkleProof;
pub use tree::MerkleTree;
pub use verify::verify;

//! Inclusion proofs.
//!
//! A proof is the list of siblings met while walking from a leaf up to the
//! root. Because pair hashing is order-independent, no left/right flags are
//! needed: folding the leaf with each sibling in turn reproduces the root.

use bincode::{Decode, Encode};

use crate::{MerkleTree, MerkleTreeError, Node, Result};


/// Upper bound accepted by [`MerkleProof::decode_from_slice`].
const MAX_ENCODED_PROOF_BYTES: usize = 16 * 1024 * 1024;

/// A leaf together with the sibling path proving its inclusion.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MerkleProof {
    /// The proved leaf, as it was stored in the tree.
    pub leaf: Node,
    /// Siblings from the leaf's level up to, but excluding, the root.
    pub siblings: Vec<Node>,
}

impl MerkleTree {
    /// Sibling path for `leaf`, ordered leaf-to-root.
    ///
    /// Returns an empty path when `leaf` was never paired: it is not in the
    /// tree, or it is the single leaf of a one-leaf tree.
    pub fn proof(&self, leaf: impl AsRef<[u8]>) -> Result<Vec<Node>> {
        if !self.is_built() {
            return Err(MerkleTreeError::NotBuilt);
        }

        let mut siblings = Vec::new();
        let mut key = leaf.as_ref();
        // A path can never be longer than the number of combining levels.
        let max_len = self.depth()?.saturating_sub(1) as usize;
        while siblings.len() < max_len {
            let Some(entry) = self.proof_entry(key) else {
                break;
            };
            siblings.push(entry.sibling.clone());
            key = entry.parent.as_bytes();
        }
        Ok(siblings)
    }

    /// Bundle `leaf` and its sibling path into a [`MerkleProof`].
    pub fn prove(&self, leaf: impl AsRef<[u8]>) -> Result<MerkleProof> {
        let leaf = leaf.as_ref();
        let siblings = self.proof(leaf)?;
        Ok(MerkleProof {
            leaf: Node::from(leaf),
            siblings,
        })
    }
}

impl MerkleProof {
    /// Number of siblings in the path.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Whether the path has no siblings.
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| MerkleTreeError::InvalidInput(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<MAX_ENCODED_PROOF_BYTES>();
        let (proof, read): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| MerkleTreeError::InvalidInput(format!("decode error: {}", e)))?;
        if read != bytes.len() {
            return Err(MerkleTreeError::InvalidInput(format!(
                "{} trailing bytes after proof",
                bytes.len() - read
            )));
        }
        Ok(proof)
    }
}

//! Proof verification.
//!
//! Pure functions, no tree required: the leaf is folded with every sibling
//! and the result compared to the expected root.

use tracing::trace;

use crate::{Node, hash::hash_pair, proof::MerkleProof};

/// Recompute a root from `leaf` and its sibling path.
///
/// With an empty path the leaf itself is returned.
pub(crate) fn fold_root(proof: &[Node], leaf: &[u8]) -> Node {
    proof.iter().fold(Node::from(leaf), |running, sibling| {
        Node::from(hash_pair(running.as_bytes(), sibling.as_bytes()))
    })
}

/// Check that `leaf` is included under `expected_root` according to `proof`.
///
/// A mismatch is reported as `false`, never as an error.
pub fn verify(proof: &[Node], expected_root: &[u8], leaf: &[u8]) -> bool {
    let matched = fold_root(proof, leaf) == *expected_root;
    trace!(proof_len = proof.len(), matched, "verified merkle proof");
    matched
}

impl MerkleProof {
    /// The root this proof commits to.
    pub fn compute_root(&self) -> Node {
        fold_root(&self.siblings, self.leaf.as_bytes())
    }

    /// Check the proof against an expected root.
    pub fn verify(&self, expected_root: &[u8]) -> bool {
        verify(&self.siblings, expected_root, self.leaf.as_bytes())
    }
}

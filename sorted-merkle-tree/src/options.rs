/// Build-time options for a [`MerkleTree`](crate::MerkleTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerkleTreeOptions {
    /// Hash every leaf with [`hash_value`](crate::hash_value) before it
    /// enters the tree. Leave off when leaves are already digests.
    pub hash_leaves: bool,
    /// Fail the build on repeated leaf content instead of letting the
    /// repeated leaves share one proof-index entry.
    pub reject_duplicate_leaves: bool,
}

impl Default for MerkleTreeOptions {
    fn default() -> Self {
        MerkleTreeOptions {
            hash_leaves: false,
            reject_duplicate_leaves: false,
        }
    }
}

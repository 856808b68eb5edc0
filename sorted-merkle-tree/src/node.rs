use std::{borrow::Borrow, fmt};

use bincode::{Decode, Encode};

use crate::{Hash, MerkleTreeError};

/// A value stored in the tree: either a caller-supplied leaf or a 32-byte
/// pair digest.
///
/// Nodes are compared by exact byte content and ordered lexicographically.
/// They display as lowercase hex.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Encode, Decode)]
pub struct Node(Vec<u8>);

impl Node {
    /// Parse a node from a hex string (upper or lower case).
    pub fn from_hex(hex_str: &str) -> Result<Self, MerkleTreeError> {
        hex::decode(hex_str)
            .map(Node)
            .map_err(|e| MerkleTreeError::InvalidInput(format!("bad hex node {hex_str:?}: {e}")))
    }

    /// Lowercase hex encoding of the node bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the node and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of bytes in the node.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the node holds zero bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.to_hex())
    }
}

impl AsRef<[u8]> for Node {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// `Vec<u8>` and `[u8]` hash identically, which keeps map lookups by slice
// consistent with lookups by `Node`.
impl Borrow<[u8]> for Node {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Node {
    fn from(bytes: Vec<u8>) -> Self {
        Node(bytes)
    }
}

impl From<&[u8]> for Node {
    fn from(bytes: &[u8]) -> Self {
        Node(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Node {
    fn from(bytes: &[u8; N]) -> Self {
        Node(bytes.to_vec())
    }
}

impl From<Hash> for Node {
    fn from(hash: Hash) -> Self {
        Node(hash.to_vec())
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node(s.as_bytes().to_vec())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node(s.into_bytes())
    }
}

impl From<&Node> for Node {
    fn from(node: &Node) -> Self {
        node.clone()
    }
}

impl PartialEq<[u8]> for Node {
    fn eq(&self, other: &[u8]) -> bool {
        self.0.as_slice() == other
    }
}

impl PartialEq<Hash> for Node {
    fn eq(&self, other: &Hash) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}

impl From<Node> for Vec<u8> {
    fn from(node: Node) -> Self {
        node.0
    }
}

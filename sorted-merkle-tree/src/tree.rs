use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    MerkleTreeError, MerkleTreeOptions, Node, Result,
    hash::{hash_pair, hash_value},
};

/// What a paired node points to in the proof index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProofEntry {
    /// The node it was hashed with.
    pub sibling: Node,
    /// The resulting parent digest.
    pub parent: Node,
}

/// A build-once binary Merkle tree.
///
/// Nodes are kept in the order they were produced: the leaves first, then
/// every parent digest level by level, ending with the root. Alongside the
/// node list, every node that was paired with a sibling is indexed to
/// `(sibling, parent)` so inclusion proofs can be read off by walking
/// upward from a leaf.
///
/// Calling [`build`](Self::build) again discards the previous tree.
#[derive(Debug, Clone, Default)]
pub struct MerkleTree {
    options: MerkleTreeOptions,
    nodes: Vec<Node>,
    leaves: Vec<Node>,
    depth: u32,
    proof_index: IndexMap<Node, ProofEntry>,
}

/// State accumulated while one `build` call reduces the levels. Only
/// committed to the tree once the root is reached.
struct BuildContext {
    nodes: Vec<Node>,
    depth: u32,
    proof_index: IndexMap<Node, ProofEntry>,
    hash_calls: u32,
}

impl BuildContext {
    fn new(leaves: &[Node]) -> Self {
        // n leaves produce at most n - 1 parents
        let capacity = leaves.len() * 2 - 1;
        let mut nodes = Vec::with_capacity(capacity);
        nodes.extend_from_slice(leaves);
        BuildContext {
            nodes,
            depth: 1,
            proof_index: IndexMap::with_capacity(capacity),
            hash_calls: 0,
        }
    }

    /// Pair up `level` into the next level. A trailing odd node is moved to
    /// the next level as-is.
    fn reduce_level(&mut self, level: Vec<Node>) -> Vec<Node> {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut iter = level.into_iter();
        while let Some(left) = iter.next() {
            let Some(right) = iter.next() else {
                next.push(left);
                break;
            };
            let parent = Node::from(hash_pair(left.as_bytes(), right.as_bytes()));
            self.hash_calls += 1;
            self.nodes.push(parent.clone());
            self.proof_index.insert(
                left.clone(),
                ProofEntry {
                    sibling: right.clone(),
                    parent: parent.clone(),
                },
            );
            self.proof_index.insert(
                right,
                ProofEntry {
                    sibling: left,
                    parent: parent.clone(),
                },
            );
            next.push(parent);
        }
        self.depth += 1;
        next
    }
}

impl MerkleTree {
    /// Create an empty, unbuilt tree with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty, unbuilt tree with the given options.
    pub fn with_options(options: MerkleTreeOptions) -> Self {
        MerkleTree {
            options,
            ..Default::default()
        }
    }

    /// Create a tree with default options and build it from `leaves`.
    pub fn from_leaves<I>(leaves: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let mut tree = Self::new();
        tree.build(leaves)?;
        Ok(tree)
    }

    /// The options this tree builds with.
    pub fn options(&self) -> &MerkleTreeOptions {
        &self.options
    }

    /// Encode a raw value the way `build` encodes leaves under the current
    /// options: hashed when `hash_leaves` is set, unchanged otherwise.
    pub fn leaf_node(&self, value: impl AsRef<[u8]>) -> Node {
        self.encode_leaf(Node::from(value.as_ref()))
    }

    fn encode_leaf(&self, leaf: Node) -> Node {
        if self.options.hash_leaves {
            Node::from(hash_value(leaf.as_bytes()))
        } else {
            leaf
        }
    }

    /// Build the tree from an ordered list of leaves.
    ///
    /// Replaces any previously built tree. On error the tree is left exactly
    /// as it was before the call.
    pub fn build<I>(&mut self, leaves: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        let leaves: Vec<Node> = leaves
            .into_iter()
            .map(|leaf| self.encode_leaf(leaf.into()))
            .collect();

        if leaves.is_empty() {
            debug!("rejected merkle build without leaves");
            return Err(MerkleTreeError::EmptyInput);
        }
        if self.options.reject_duplicate_leaves {
            check_unique(&leaves)?;
        }

        let mut ctx = BuildContext::new(&leaves);
        let mut level = leaves.clone();
        let mut height = 0u32;
        while level.len() > 1 {
            let width = level.len();
            level = ctx.reduce_level(level);
            trace!(
                height,
                width,
                carried = width % 2 == 1,
                "reduced merkle level"
            );
            height += 1;
        }

        debug!(
            leaves = leaves.len(),
            depth = ctx.depth,
            size = ctx.nodes.len(),
            hash_calls = ctx.hash_calls,
            "built merkle tree"
        );

        self.nodes = ctx.nodes;
        self.leaves = leaves;
        self.depth = ctx.depth;
        self.proof_index = ctx.proof_index;
        Ok(())
    }

    /// Whether a successful `build` has happened.
    pub fn is_built(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// The leaves of the last build, in input order.
    ///
    /// These are the values as they entered the tree, so they are digests
    /// when `hash_leaves` is set. Empty before the first build.
    pub fn leaves(&self) -> &[Node] {
        &self.leaves
    }

    /// Number of leaves.
    pub fn count_leaves(&self) -> usize {
        self.leaves.len()
    }

    /// Every node in production order, root last.
    pub fn tree(&self) -> Result<&[Node]> {
        if !self.is_built() {
            return Err(MerkleTreeError::NotBuilt);
        }
        Ok(&self.nodes)
    }

    /// The root of the tree.
    pub fn root(&self) -> Result<&Node> {
        self.nodes.last().ok_or(MerkleTreeError::NotBuilt)
    }

    /// Number of levels, counting the leaf level as 1.
    pub fn depth(&self) -> Result<u32> {
        if !self.is_built() {
            return Err(MerkleTreeError::NotBuilt);
        }
        Ok(self.depth)
    }

    /// Number of nodes stored across all levels. Zero before the first build.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate the proof index as `(node, sibling, parent)` in the order the
    /// entries were first recorded.
    pub fn proof_index(&self) -> impl Iterator<Item = (&Node, &Node, &Node)> {
        self.proof_index
            .iter()
            .map(|(node, entry)| (node, &entry.sibling, &entry.parent))
    }

    /// Look up the pairing recorded for `node`.
    pub(crate) fn proof_entry(&self, node: &[u8]) -> Option<&ProofEntry> {
        self.proof_index.get(node)
    }

    /// Verify `leaf` against `root` using `proof`. See [`crate::verify()`].
    pub fn verify(proof: &[Node], root: &[u8], leaf: &[u8]) -> bool {
        crate::verify(proof, root, leaf)
    }
}

fn check_unique(leaves: &[Node]) -> Result<()> {
    let mut seen = HashSet::with_capacity(leaves.len());
    for (index, leaf) in leaves.iter().enumerate() {
        if !seen.insert(leaf) {
            debug!(index, leaf = %leaf, "rejected duplicate merkle leaf");
            return Err(MerkleTreeError::DuplicateLeaf {
                index,
                leaf: leaf.clone(),
            });
        }
    }
    Ok(())
}

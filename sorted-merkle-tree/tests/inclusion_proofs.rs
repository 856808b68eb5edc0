use assert_matches::assert_matches;
use sorted_merkle_tree::{
    MerkleProof, MerkleTree, MerkleTreeError, MerkleTreeOptions, Node, hash_value, verify,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const RECORDS: [&str; 5] = [
    "Some data",
    "that should",
    "be verified",
    "by merkle",
    "odd_value",
];

fn hashed_records() -> Vec<Node> {
    RECORDS
        .iter()
        .map(|r| Node::from(hash_value(r.as_bytes())))
        .collect()
}

#[test]
fn every_leaf_verifies_against_the_root() {
    init_tracing();
    let leaves = hashed_records();
    let tree = MerkleTree::from_leaves(leaves.clone()).expect("build");
    let root = tree.root().expect("root");

    for leaf in &leaves {
        let proof = tree.proof(leaf).expect("proof");
        assert!(verify(&proof, root.as_bytes(), leaf.as_bytes()), "leaf {leaf}");
    }
    assert_eq!(tree.depth().expect("depth"), 4);
    assert_eq!(tree.size(), 9);
}

#[test]
fn proof_survives_transport_as_bytes() {
    init_tracing();
    let mut tree = MerkleTree::with_options(MerkleTreeOptions {
        hash_leaves: true,
        ..Default::default()
    });
    tree.build(RECORDS).expect("build");
    let root_hex = tree.root().expect("root").to_hex();

    let leaf = tree.leaf_node("by merkle");
    let bytes = tree
        .prove(&leaf)
        .expect("prove")
        .encode_to_vec()
        .expect("encode");

    // Receiver side: only the encoded proof and the hex root are known
    let proof = MerkleProof::decode_from_slice(&bytes).expect("decode");
    let root = Node::from_hex(&root_hex).expect("root hex");
    assert!(proof.verify(root.as_bytes()));
    assert_eq!(proof.leaf, Node::from(hash_value(b"by merkle")));
}

#[test]
fn raw_leaf_is_not_provable_when_leaves_are_hashed() {
    init_tracing();
    let mut tree = MerkleTree::with_options(MerkleTreeOptions {
        hash_leaves: true,
        ..Default::default()
    });
    tree.build(RECORDS).expect("build");
    let root = tree.root().expect("root");

    let proof = tree.proof("by merkle").expect("proof");
    assert!(proof.is_empty());
    assert!(!verify(&proof, root.as_bytes(), b"by merkle"));
}

#[test]
fn misuse_is_reported_as_errors() {
    init_tracing();
    let mut tree = MerkleTree::new();
    assert_matches!(tree.root(), Err(MerkleTreeError::NotBuilt));
    assert_matches!(tree.build(Vec::<Node>::new()), Err(MerkleTreeError::EmptyInput));
    assert_matches!(Node::from_hex("not hex"), Err(MerkleTreeError::InvalidInput(_)));
    assert_eq!(
        MerkleTreeError::NotBuilt.to_string(),
        "merkle tree has not been built"
    );
}

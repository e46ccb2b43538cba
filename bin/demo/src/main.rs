//! Inclusion-proof demo
//!
//! Commits a batch of sample transactions to a merkle root, generates the
//! inclusion proof for one position, and verifies it. A tampered leaf is
//! checked as well and must fail.

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use txproof_merkle::{Keccak256Hasher, MerkleHasher, MerkleTree, Sha256Hasher};

/// Hash capability selection
#[derive(Clone, Debug)]
enum HasherKind {
    /// SHA-256 (default)
    Sha256,
    /// Keccak-256
    Keccak256,
}

impl From<&str> for HasherKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "keccak256" => Self::Keccak256,
            _ => Self::Sha256,
        }
    }
}

/// Demo configuration
#[derive(Clone, Debug)]
struct Config {
    /// Which hash capability to wire into the tree
    hasher: HasherKind,
    /// Leaf position to prove
    proof_index: usize,
}

impl Config {
    /// Load from environment variables
    fn from_env() -> Self {
        let hasher = std::env::var("DEMO_HASHER")
            .map(|s| HasherKind::from(s.as_str()))
            .unwrap_or(HasherKind::Sha256);
        let proof_index = std::env::var("DEMO_PROOF_INDEX")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(2);
        Self {
            hasher,
            proof_index,
        }
    }
}

const SAMPLE_TXS: [&str; 5] = [
    "tx1: Alice pays Bob 10 BTC",
    "tx2: Bob pays Charlie 5 BTC",
    "tx3: Charlie pays Dave 2 BTC",
    "tx4: Dave pays Eve 1 BTC",
    "tx5: Eve pays Frank 1 BTC",
];

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::from_env();
    info!("hasher: {:?}", config.hasher);

    match config.hasher {
        HasherKind::Sha256 => run(Sha256Hasher, &config),
        HasherKind::Keccak256 => run(Keccak256Hasher, &config),
    }
}

fn run<H: MerkleHasher>(hasher: H, config: &Config) -> Result<()> {
    let mut tree = MerkleTree::new(hasher);
    for tx in SAMPLE_TXS {
        tree.add_leaf(tx.as_bytes());
    }

    let root = tree.root().expect("tree has leaves");
    info!("committed {} transactions", tree.leaf_count());
    info!("merkle root: {}", hex::encode(&root));

    let index = config.proof_index;
    let proof = tree.generate_proof(index)?;
    info!("proof for leaf {} ({} siblings):", index, proof.len());
    for (i, sibling) in proof.siblings.iter().enumerate() {
        info!("  [{}] {}", i, hex::encode(sibling));
    }

    let leaf = tree.leaf(index).expect("index in range").to_vec();
    let valid = tree.verify_proof(&leaf, index, &proof, &root);
    info!("proof valid: {}", valid);

    // the same proof must reject a tampered leaf
    let mut tampered = leaf.clone();
    tampered[0] ^= 0x01;
    let tampered_valid = tree.verify_proof(&tampered, index, &proof, &root);
    info!("tampered leaf valid: {}", tampered_valid);

    Ok(())
}

//! Server Seed Commitment
//!
//! The server publishes `SHA-256(server_seed)` before the match and reveals
//! the seed afterwards. A matching hash proves the seed was fixed before any
//! client seed or roll was known.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::hash::hash_hex;
use crate::proof::report::decode_hex_field;
use crate::proof::verify::VerificationError;

/// Published commitment to a server seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCommitment {
    /// Lowercase hex SHA-256 of the raw seed bytes.
    pub hash: String,
}

impl SeedCommitment {
    /// Commitment for a raw seed.
    pub fn from_seed(seed: &[u8]) -> Self {
        Self {
            hash: hash_hex(seed),
        }
    }

    /// Commitment as recorded in a report.
    pub fn from_hex(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Check a revealed seed against this commitment.
    ///
    /// Compares the hex text exactly; an uppercase commitment never matches.
    pub fn verify(&self, seed: &[u8]) -> bool {
        hash_hex(seed) == self.hash
    }
}

/// Decode the revealed server seed and check it against its commitment.
///
/// Returns the raw seed bytes, which key the dice stream.
pub fn check_server_seed(seed_hex: &str, claimed_hash: &str) -> Result<Vec<u8>, VerificationError> {
    let seed = decode_hex_field(seed_hex, "server_seed")?;
    let computed = hash_hex(&seed);

    if computed != claimed_hash {
        return Err(VerificationError::CommitmentMismatch {
            expected: claimed_hash.to_string(),
            computed,
        });
    }

    debug!(commitment = %computed, "server seed matches commitment");
    Ok(seed)
}

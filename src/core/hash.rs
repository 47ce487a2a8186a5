//! SHA-256 Hashing
//!
//! Provides the one-way hash used for:
//! - Server seed commitments
//! - Combined seed derivation from both players' contributions

use sha2::{Digest, Sha256};

/// Hash output type (256 bits / 32 bytes)
pub type Digest32 = [u8; 32];

/// Incremental SHA-256 over a byte message.
///
/// Feeding parts one by one hashes exactly the same bytes as feeding their
/// concatenation. Order of updates is critical.
#[derive(Clone, Default)]
pub struct SeedHasher {
    hasher: Sha256,
}

impl SeedHasher {
    /// Create an empty hasher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update with raw bytes.
    #[inline]
    pub fn update_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Update with the UTF-8 bytes of a string.
    #[inline]
    pub fn update_str(&mut self, s: &str) {
        self.hasher.update(s.as_bytes());
    }

    /// Update with a single byte.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> Digest32 {
        self.hasher.finalize().into()
    }
}

/// Compute the SHA-256 digest of arbitrary data.
pub fn hash_bytes(data: &[u8]) -> Digest32 {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the SHA-256 digest of `data` as lowercase hex.
pub fn hash_hex(data: &[u8]) -> String {
    hex::encode(hash_bytes(data))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_hash() {
        // SHA-256 of 16 zero bytes
        assert_eq!(
            hash_hex(&[0u8; 16]),
            "374708fff7719dd5979ec875d56cd2286f6d3cf7ec317a3b25632aab28ec37bb"
        );
    }

    #[test]
    fn test_hex_is_lowercase() {
        let h = hash_hex(b"backgammon");
        assert_eq!(h.len(), 64);
        assert_eq!(h, h.to_lowercase());
    }

    #[test]
    fn test_incremental_matches_concatenation() {
        let mut hasher = SeedHasher::new();
        hasher.update_str("1001:2002:");
        hasher.update_bytes(&[1, 2, 3]);
        hasher.update_u8(b':');
        hasher.update_bytes(&[4, 5, 6]);

        let mut whole = b"1001:2002:".to_vec();
        whole.extend_from_slice(&[1, 2, 3, b':', 4, 5, 6]);

        assert_eq!(hasher.finalize(), hash_bytes(&whole));
    }

    #[test]
    fn test_hash_order_matters() {
        let hash1 = {
            let mut h = SeedHasher::new();
            h.update_u8(1);
            h.update_u8(2);
            h.finalize()
        };

        let hash2 = {
            let mut h = SeedHasher::new();
            h.update_u8(2);
            h.update_u8(1);
            h.finalize()
        };

        assert_ne!(hash1, hash2);
    }
}

//! Keyed Dice Stream
//!
//! Reproducible die faces from HMAC-SHA256 blocks:
//!
//! ```text
//! block(N) = HMAC-SHA256(key = server_seed, combined_seed || N as u32 BE)
//! ```
//!
//! Bytes are consumed in order. A byte below [`REJECTION_THRESHOLD`] maps to
//! `(byte % 6) + 1`; anything above is discarded, so every face is backed by
//! exactly 42 byte values.

use std::fmt;

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use super::hash::Digest32;

type HmacSha256 = Hmac<Sha256>;

/// Bytes at or above this value are rejected. 252 = 42 × 6 is the largest
/// multiple of 6 that fits in a byte. Changing it breaks every issued report.
pub const REJECTION_THRESHOLD: u8 = 252;

/// Size of one HMAC-SHA256 output block.
pub const BLOCK_SIZE: usize = 32;

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

/// One backgammon roll: two dice, first then second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollPair {
    /// First die (1-6).
    pub first: u8,
    /// Second die (1-6).
    pub second: u8,
}

impl RollPair {
    /// Create a roll from two faces.
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// The roll as it is written in a report, e.g. `b"35"`.
    pub fn to_ascii(self) -> [u8; 2] {
        [b'0' + self.first, b'0' + self.second]
    }

    /// Is this a double (both dice equal)?
    pub fn is_double(self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for RollPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.first, self.second)
    }
}

/// Map one stream byte to a die face, or `None` if the byte is rejected.
#[inline]
pub fn die_from_byte(byte: u8) -> Option<u8> {
    if byte < REJECTION_THRESHOLD {
        Some(byte % DIE_FACES + 1)
    } else {
        None
    }
}

/// Deterministic dice generator for one verification run.
///
/// # Determinism Guarantee
///
/// Given the same server seed, combined seed and starting nonce, the
/// generator yields the same rolls on every platform. It holds no global
/// state; each verification owns its own instance.
#[derive(Clone)]
pub struct DiceStream {
    /// HMAC keyed with the server seed, cloned for each block.
    mac: HmacSha256,
    /// Combined seed, the message prefix of every block.
    prefix: Digest32,
    /// Nonce of the next block to generate.
    nonce: u32,
    /// Current block.
    block: Digest32,
    /// Read position in `block`.
    cursor: usize,
}

impl DiceStream {
    /// Create a stream starting at nonce 0.
    pub fn new(server_seed: &[u8], combined_seed: Digest32) -> Self {
        Self::with_nonce(server_seed, combined_seed, 0)
    }

    /// Create a stream starting at an arbitrary nonce.
    pub fn with_nonce(server_seed: &[u8], combined_seed: Digest32, nonce: u32) -> Self {
        let mac = HmacSha256::new_from_slice(server_seed).expect("HMAC accepts keys of any size");
        Self {
            mac,
            prefix: combined_seed,
            nonce,
            block: [0; BLOCK_SIZE],
            // Start exhausted so the first draw pulls a block
            cursor: BLOCK_SIZE,
        }
    }

    /// Nonce of the next block to generate.
    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    /// Compute the block for `nonce` without touching the stream state.
    pub fn block_at(&self, nonce: u32) -> Digest32 {
        let mut mac = self.mac.clone();
        mac.update(&self.prefix);
        mac.update(&nonce.to_be_bytes());
        mac.finalize().into_bytes().into()
    }

    /// Load the block at the current nonce and advance the nonce.
    fn refill(&mut self) {
        self.block = self.block_at(self.nonce);
        self.cursor = 0;
        // 32-bit counter semantics
        self.nonce = self.nonce.wrapping_add(1);
    }

    /// Draw one uniformly distributed die face (1-6).
    ///
    /// Uses rejection sampling; pulls a new block when the current one is
    /// exhausted.
    pub fn next_die(&mut self) -> u8 {
        loop {
            if self.cursor >= BLOCK_SIZE {
                self.refill();
            }
            let byte = self.block[self.cursor];
            self.cursor += 1;
            if let Some(face) = die_from_byte(byte) {
                return face;
            }
        }
    }

    /// Produce the next roll.
    ///
    /// Every roll starts from a fresh block at the current nonce, even if the
    /// previous block still has unread bytes.
    pub fn next_roll(&mut self) -> RollPair {
        self.refill();
        let first = self.next_die();
        let second = self.next_die();
        RollPair::new(first, second)
    }
}

impl Iterator for DiceStream {
    type Item = RollPair;

    fn next(&mut self) -> Option<RollPair> {
        Some(self.next_roll())
    }
}

impl fmt::Debug for DiceStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key material stays out of logs
        f.debug_struct("DiceStream")
            .field("prefix", &hex::encode(self.prefix))
            .field("nonce", &self.nonce)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Core deterministic primitives.
//!
//! Everything in this module is a pure function of its inputs. The same
//! seeds produce the same bytes on every platform (x86, ARM, WASM).

pub mod hash;
pub mod rng;

// Re-export core types
pub use hash::{hash_bytes, hash_hex, Digest32, SeedHasher};
pub use rng::{DiceStream, RollPair, REJECTION_THRESHOLD};

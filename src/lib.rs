//! # Backgammon Provably-Fair Verifier
//!
//! Re-derives the dice of a finished backgammon match from its committed
//! seeds and checks them against the rolls the server recorded.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  BACKGAMMON FAIR VERIFIER                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── hash.rs     - SHA-256 helpers                           │
//! │  └── rng.rs      - HMAC-SHA256 dice stream                   │
//! │                                                              │
//! │  proof/          - Report verification                       │
//! │  ├── report.rs   - Report decoding and shape checks          │
//! │  ├── commitment.rs - Server seed commitment                  │
//! │  ├── mixer.rs    - Combined client seed                      │
//! │  ├── verify.rs   - Roll replay and comparison                │
//! │  └── outcome.rs  - Serializable verdict                      │
//! │                                                              │
//! │  config.rs       - CLI configuration                         │
//! │  export.rs       - Single browser export (feature `wasm`)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Trust Model
//!
//! ```text
//! block(N) = HMAC-SHA256(server_seed, combined_seed || N as u32 BE)
//! ```
//!
//! The server commits to `SHA-256(server_seed)` before the match. Players
//! contribute client seeds. Once the seed is revealed, anyone can replay the
//! stream. Verification holds no state between calls, so independent
//! reports can be checked in parallel.
//!
//! ```
//! use backgammon_fair::verify_str;
//!
//! let report = r#"{
//!     "game_id": "demo",
//!     "server_seed": "00000000000000000000000000000000",
//!     "server_seed_hash": "374708fff7719dd5979ec875d56cd2286f6d3cf7ec317a3b25632aab28ec37bb",
//!     "rolls": "1325",
//!     "players": [
//!         {"uid": 1001, "client_seed": "00112233445566778899aabbccddeeff", "source": "player"},
//!         {"uid": 2002, "client_seed": "ffeeddccbbaa99887766554433221100", "source": "player"}
//!     ]
//! }"#;
//!
//! let verified = verify_str(report).unwrap();
//! assert_eq!(verified.rolls_checked, 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod export;
pub mod proof;

// Re-export commonly used types
pub use crate::core::rng::{DiceStream, RollPair, REJECTION_THRESHOLD};
pub use proof::{
    verify_bytes, verify_report, verify_str, PlayerEntry, Report, SeedSource,
    VerificationError, VerificationOutcome, Verified,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

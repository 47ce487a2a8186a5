//! Provably-Fair Verification
//!
//! Checks a game report end to end:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    VERIFICATION PIPELINE                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  report.rs     - JSON report decoding and shape checks      │
//! │  commitment.rs - Server seed vs. published hash             │
//! │  mixer.rs      - Combined seed from both client seeds       │
//! │  verify.rs     - Dice replay and roll comparison            │
//! │  outcome.rs    - Serializable verdict for collaborators     │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod commitment;
pub mod mixer;
pub mod outcome;
pub mod report;
pub mod verify;

// Re-export key types
pub use commitment::{check_server_seed, SeedCommitment};
pub use mixer::combined_seed;
pub use outcome::VerificationOutcome;
pub use report::{PlayerEntry, Report, ReportedRoll, SeedSource, StructuralViolation};
pub use verify::{
    compare_rolls, verify_bytes, verify_report, verify_str, VerificationError, Verified,
};

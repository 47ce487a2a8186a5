//! Verification API
//!
//! Re-derives every roll of a report and compares it with what the server
//! recorded. Verification is all-or-nothing: the first violation ends it.

use tracing::{debug, instrument, warn};

use crate::core::rng::{DiceStream, RollPair};
use crate::proof::commitment::check_server_seed;
use crate::proof::mixer::combined_seed;
use crate::proof::report::{reported_rolls, Report, ReportedRoll, StructuralViolation};

/// Successful verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verified {
    /// Game the report belongs to.
    pub game_id: String,
    /// Number of rolls re-derived and matched.
    pub rolls_checked: usize,
}

/// Errors that can occur during verification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    /// JSON does not decode into a report.
    #[error("malformed report: {0}")]
    MalformedReport(String),

    /// Wrong player count or odd roll string.
    #[error(transparent)]
    StructuralViolation(#[from] StructuralViolation),

    /// A hex field failed to decode.
    #[error("{field} is not valid hex")]
    InvalidEncoding {
        /// Report field that failed.
        field: String,
    },

    /// Server seed does not hash to the committed value.
    #[error("server_seed_hash mismatch: committed {expected}, server_seed hashes to {computed}")]
    CommitmentMismatch {
        /// Hash recorded in the report.
        expected: String,
        /// Hash of the revealed seed.
        computed: String,
    },

    /// Regenerated roll differs from the recorded one.
    #[error("roll {position} mismatch: expected {expected}, but got {actual}")]
    RollMismatch {
        /// Character offset of the roll in `rolls`.
        position: usize,
        /// Roll produced by the dice stream.
        expected: RollPair,
        /// Roll recorded in the report.
        actual: ReportedRoll,
    },
}

impl VerificationError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedReport(_) => "MalformedReport",
            Self::StructuralViolation(_) => "StructuralViolation",
            Self::InvalidEncoding { .. } => "InvalidEncoding",
            Self::CommitmentMismatch { .. } => "CommitmentMismatch",
            Self::RollMismatch { .. } => "RollMismatch",
        }
    }
}

/// Parse raw JSON and verify it.
pub fn verify_bytes(blob: &[u8]) -> Result<Verified, VerificationError> {
    let report = Report::from_slice(blob)?;
    verify_report(&report)
}

/// Parse a JSON string and verify it.
pub fn verify_str(json: &str) -> Result<Verified, VerificationError> {
    verify_bytes(json.as_bytes())
}

/// Verify every recorded roll of a parsed report.
#[instrument(level = "debug", skip(report), fields(game_id = %report.game_id))]
pub fn verify_report(report: &Report) -> Result<Verified, VerificationError> {
    let result = run_pipeline(report);

    match &result {
        Ok(verified) => debug!(rolls = verified.rolls_checked, "report verified"),
        Err(err) => warn!(kind = err.kind(), "verification failed: {}", err),
    }

    result
}

fn run_pipeline(report: &Report) -> Result<Verified, VerificationError> {
    // 1. Shape
    report.check_structure()?;

    // 2. Trust anchor
    let server_seed = check_server_seed(&report.server_seed, &report.server_seed_hash)?;

    // 3. Combined seed
    let combined = combined_seed(&report.players[0], &report.players[1])?;

    // 4. Replay the dice
    let mut stream = DiceStream::new(&server_seed, combined);
    let rolls_checked = compare_rolls(&report.rolls, &mut stream)?;

    Ok(Verified {
        game_id: report.game_id.clone(),
        rolls_checked,
    })
}

/// Walk the recorded rolls and the stream in lock-step.
///
/// Returns the number of rolls compared. Expects an even-length string; a
/// trailing odd character is not compared.
pub fn compare_rolls(rolls: &str, stream: &mut DiceStream) -> Result<usize, VerificationError> {
    let mut checked = 0;

    for (position, actual) in reported_rolls(rolls) {
        let expected = stream.next_roll();
        let [e1, e2] = expected.to_ascii();

        if e1 as char != actual.first || e2 as char != actual.second {
            return Err(VerificationError::RollMismatch {
                position,
                expected,
                actual,
            });
        }
        checked += 1;
    }

    Ok(checked)
}

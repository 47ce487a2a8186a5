//! Verification Outcome
//!
//! Flat, serializable view of a verification result for the CLI, the WASM
//! export, or anything else that renders a verdict.

use serde::{Deserialize, Serialize};

use crate::core::rng::RollPair;
use crate::proof::verify::{VerificationError, Verified};

/// Rendered verdict for one report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    /// Did every check pass?
    pub verified: bool,

    /// Game identifier, when verification succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,

    /// Rolls re-derived and matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolls_checked: Option<usize>,

    /// Error kind (e.g. `RollMismatch`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,

    /// Human-readable error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Character offset of a mismatching roll.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// Roll the dice stream produced at `position`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<RollPair>,

    /// Roll the report recorded at `position`, verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl VerificationOutcome {
    /// Outcome for a passing report.
    pub fn passed(verified: &Verified) -> Self {
        Self {
            verified: true,
            game_id: Some(verified.game_id.clone()),
            rolls_checked: Some(verified.rolls_checked),
            error_kind: None,
            message: None,
            position: None,
            expected: None,
            actual: None,
        }
    }

    /// Outcome for a failing report.
    pub fn failed(err: &VerificationError) -> Self {
        let mut outcome = Self {
            verified: false,
            game_id: None,
            rolls_checked: None,
            error_kind: Some(err.kind().to_string()),
            message: Some(err.to_string()),
            position: None,
            expected: None,
            actual: None,
        };

        if let VerificationError::RollMismatch { position, expected, actual } = err {
            outcome.position = Some(*position);
            outcome.expected = Some(*expected);
            outcome.actual = Some(format!("{}{}", actual.first, actual.second));
        }

        outcome
    }

    /// Outcome for any result.
    pub fn from_result(result: &Result<Verified, VerificationError>) -> Self {
        match result {
            Ok(verified) => Self::passed(verified),
            Err(err) => Self::failed(err),
        }
    }

    /// One-line verdict: `✅ VERIFIED` or `❌ <error>`.
    pub fn human_line(&self) -> String {
        if self.verified {
            "✅ VERIFIED".to_string()
        } else {
            format!("❌ {}", self.message.as_deref().unwrap_or("verification failed"))
        }
    }

    /// Verdict string of the browser export: `OK` or `Error: <error>`.
    pub fn status_line(&self) -> String {
        if self.verified {
            "OK".to_string()
        } else {
            format!("Error: {}", self.message.as_deref().unwrap_or("verification failed"))
        }
    }

    /// Pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Result<Verified, VerificationError>> for VerificationOutcome {
    fn from(result: &Result<Verified, VerificationError>) -> Self {
        Self::from_result(result)
    }
}

//! Game Report
//!
//! Mirrors the JSON exported by the game server at the end of a match.
//! Decoding only checks shape; hex fields are decoded by the stage that
//! consumes them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::proof::verify::VerificationError;

/// Number of players in a backgammon match.
pub const PLAYER_COUNT: usize = 2;

/// Characters per roll in the `rolls` string.
pub const ROLL_WIDTH: usize = 2;

/// Provably-fair report for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Unique game identifier.
    pub game_id: String,

    /// Revealed server seed (hex, 16 bytes).
    pub server_seed: String,

    /// SHA-256 of the decoded server seed (lowercase hex), published before
    /// the match.
    pub server_seed_hash: String,

    /// Every roll as two ASCII digits, first die then second: `"3512..."`.
    pub rolls: String,

    /// Seed contributions, exactly two.
    pub players: Vec<PlayerEntry>,
}

/// One player's contribution to the seed mix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// Player identifier.
    pub uid: i64,

    /// Client seed (hex, 16 bytes).
    pub client_seed: String,

    /// Who supplied the client seed.
    pub source: SeedSource,
}

/// Provenance of a client seed. Informational only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedSource {
    /// Chosen by the player.
    Player,
    /// Substituted by the server because the player sent none.
    Fallback,
    /// Any tag this verifier does not know about.
    #[serde(other)]
    Unknown,
}

/// Shape errors detected before any cryptography runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralViolation {
    /// Player list does not hold exactly two entries.
    #[error("report must contain exactly 2 players, found {found}")]
    PlayerCount {
        /// Number of entries in the report.
        found: usize,
    },

    /// `rolls` cannot be split into two-character rolls.
    #[error("rolls must have an even number of characters, found {length}")]
    OddRollLength {
        /// Length of `rolls` in bytes.
        length: usize,
    },
}

/// A roll as written in the report, kept verbatim so garbage can be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportedRoll {
    /// First character.
    pub first: char,
    /// Second character.
    pub second: char,
}

impl ReportedRoll {
    /// Build from two raw report bytes.
    pub fn from_bytes(first: u8, second: u8) -> Self {
        Self {
            first: first as char,
            second: second as char,
        }
    }
}

impl fmt::Display for ReportedRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.first, self.second)
    }
}

impl Report {
    /// Decode a report from raw JSON bytes.
    pub fn from_slice(blob: &[u8]) -> Result<Self, VerificationError> {
        serde_json::from_slice(blob).map_err(|e| VerificationError::MalformedReport(e.to_string()))
    }

    /// Decode a report from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, VerificationError> {
        Self::from_slice(json.as_bytes())
    }

    /// Check player count and roll string parity.
    pub fn check_structure(&self) -> Result<(), StructuralViolation> {
        if self.players.len() != PLAYER_COUNT {
            return Err(StructuralViolation::PlayerCount {
                found: self.players.len(),
            });
        }
        if self.rolls.len() % ROLL_WIDTH != 0 {
            return Err(StructuralViolation::OddRollLength {
                length: self.rolls.len(),
            });
        }
        Ok(())
    }

    /// Number of complete rolls in the report.
    pub fn roll_count(&self) -> usize {
        self.rolls.len() / ROLL_WIDTH
    }

    /// Iterate `(character offset, roll)` over the recorded rolls.
    ///
    /// A trailing odd character is ignored; call [`Report::check_structure`]
    /// first.
    pub fn reported_rolls(&self) -> impl Iterator<Item = (usize, ReportedRoll)> + '_ {
        reported_rolls(&self.rolls)
    }
}

impl PlayerEntry {
    /// Create an entry.
    pub fn new(uid: i64, client_seed: impl Into<String>, source: SeedSource) -> Self {
        Self {
            uid,
            client_seed: client_seed.into(),
            source,
        }
    }
}

/// Split a roll string into `(character offset, roll)` pairs.
pub fn reported_rolls(rolls: &str) -> impl Iterator<Item = (usize, ReportedRoll)> + '_ {
    rolls
        .as_bytes()
        .chunks_exact(ROLL_WIDTH)
        .enumerate()
        .map(|(i, pair)| (i * ROLL_WIDTH, ReportedRoll::from_bytes(pair[0], pair[1])))
}

/// Decode a hex report field, naming it on failure.
pub fn decode_hex_field(value: &str, field: &str) -> Result<Vec<u8>, VerificationError> {
    hex::decode(value).map_err(|_| VerificationError::InvalidEncoding {
        field: field.to_string(),
    })
}

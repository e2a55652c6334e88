//! Core data structures for wallist processing.
//!
//! Defines the parsed player record, the per-player rating classification
//! reported to the operator, and run statistics.

use crate::constants::NO_GAME_MARKER;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One wallist row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Player PIN with the marker stripped; never empty when present
    pub identifier: Option<String>,
    /// Placement token, kept verbatim
    pub place: String,
    pub last_name: String,
    pub first_name: String,
    pub rank: String,
    pub country: String,
    pub club: String,
    /// Game-result tokens in round order
    pub games: Vec<String>,
    /// Tournament rating; empty until resolved
    pub rating: String,
}

impl PlayerRecord {
    /// "Last First", as shown in the report name column
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// True when every round is the no-game marker (vacuously true with no rounds)
    pub fn played_no_games(&self) -> bool {
        self.games.iter().all(|game| game == NO_GAME_MARKER)
    }

    /// New record carrying `rating`
    pub fn with_rating(self, rating: impl Into<String>) -> Self {
        Self {
            rating: rating.into(),
            ..self
        }
    }
}

/// Outcome of rating resolution for one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayClassification {
    /// Rating found for the player's PIN
    Resolved(String),
    /// No PIN and every round unplayed
    NoIdentifierNoGames,
    /// No PIN although games were played; needs operator attention
    NoIdentifier,
}

impl fmt::Display for DisplayClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayClassification::Resolved(rating) => write!(f, "{}", rating),
            DisplayClassification::NoIdentifierNoGames => write!(f, "no PIN, no games"),
            DisplayClassification::NoIdentifier => write!(f, "no PIN"),
        }
    }
}

/// Run statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub players: usize,
    pub resolved: usize,
    pub unrated_no_games: usize,
    pub unrated: usize,
    pub round_count: usize,
}

impl RunStats {
    pub fn record(&mut self, classification: &DisplayClassification) {
        self.players += 1;
        match classification {
            DisplayClassification::Resolved(_) => self.resolved += 1,
            DisplayClassification::NoIdentifierNoGames => self.unrated_no_games += 1,
            DisplayClassification::NoIdentifier => self.unrated += 1,
        }
    }
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: String,
    pub report_path: PathBuf,
    pub stats: RunStats,
}

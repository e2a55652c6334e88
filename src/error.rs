//! Error handling for wallist processing.
//!
//! Covers the three fatal data conditions of a run (unknown tournament,
//! malformed wallist row, unresolvable rating) alongside the transport,
//! filesystem and configuration failures around them.

use thiserror::Error;

use crate::constants::{EXIT_DATA_ERROR, EXIT_FAILURE};

#[derive(Error, Debug)]
pub enum WallistError {
    #[error("Tournament [{tournament_id}] was not found in EGD")]
    TournamentNotFound { tournament_id: String },

    #[error("Unsupported tournament data format at line {line_number}: expected at least 6 fields, found {fields} in '{line}'")]
    MalformedRow {
        line_number: usize,
        line: String,
        fields: usize,
    },

    #[error("Player [{player_id}] rating for tournament [{tournament_id}] was not found in EGD")]
    RatingNotFound {
        tournament_id: String,
        player_id: String,
    },

    #[error("Invalid tournament PIN '{value}': {reason}")]
    InvalidTournamentId { value: String, reason: String },

    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Config file parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl WallistError {
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for conditions caused by the tournament data itself rather than
    /// by the network, filesystem or configuration.
    pub fn is_fatal_data_error(&self) -> bool {
        matches!(
            self,
            WallistError::TournamentNotFound { .. }
                | WallistError::MalformedRow { .. }
                | WallistError::RatingNotFound { .. }
        )
    }

    /// Process exit status for a run that failed with this error
    pub fn exit_code(&self) -> i32 {
        if self.is_fatal_data_error() {
            EXIT_DATA_ERROR
        } else {
            EXIT_FAILURE
        }
    }
}

pub type Result<T> = std::result::Result<T, WallistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_errors_are_classified() {
        let err = WallistError::RatingNotFound {
            tournament_id: "T230101A".to_string(),
            player_id: "12345".to_string(),
        };
        assert!(err.is_fatal_data_error());
        assert_eq!(
            err.to_string(),
            "Player [12345] rating for tournament [T230101A] was not found in EGD"
        );

        let err = WallistError::configuration("timeout must be positive");
        assert!(!err.is_fatal_data_error());
    }

    #[test]
    fn test_exit_codes() {
        let not_found = WallistError::TournamentNotFound {
            tournament_id: "T999999X".to_string(),
        };
        let malformed = WallistError::MalformedRow {
            line_number: 2,
            line: "2 Doe Jane".to_string(),
            fields: 3,
        };
        assert_eq!(not_found.exit_code(), EXIT_DATA_ERROR);
        assert_eq!(malformed.exit_code(), EXIT_DATA_ERROR);

        let io = WallistError::Io(std::io::Error::other("disk full"));
        let invalid = WallistError::InvalidTournamentId {
            value: "../x".to_string(),
            reason: "PIN must not contain path components".to_string(),
        };
        assert_eq!(io.exit_code(), EXIT_FAILURE);
        assert_eq!(invalid.exit_code(), EXIT_FAILURE);
        assert_eq!(WallistError::configuration("bad url").exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_malformed_row_message() {
        let err = WallistError::MalformedRow {
            line_number: 3,
            line: "1 Smith John 3k FR".to_string(),
            fields: 5,
        };
        let message = err.to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("found 5"));
    }
}

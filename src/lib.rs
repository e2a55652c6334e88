//! EGD Wallist Library
//!
//! Builds a rated wallist report for a tournament in the European Go
//! Database: the plain-text wallist of the tournament card is parsed into
//! player records, each player's rating for that tournament is looked up on
//! their player card, and the result is rendered as a fixed-width table.
//!
//! This library provides tools for:
//! - Parsing wallist rows (placement, name, rank, game results, PIN)
//! - Resolving per-tournament ratings one player at a time
//! - Rendering the aligned text report
//! - Fetching card pages from the EGD over HTTP

pub mod cli;
pub mod config;
pub mod constants;
pub mod egd;
pub mod error;
pub mod models;
pub mod processor;
pub mod rating;
pub mod report;
pub mod wallist;

// Re-export commonly used types
pub use config::WallistConfig;
pub use error::{Result, WallistError};
pub use models::{DisplayClassification, PlayerRecord, RunOutcome, RunStats};

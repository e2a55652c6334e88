//! Wallist report pipeline.
//!
//! Runs one tournament end to end: fetch the wallist, parse it, resolve every
//! player's rating in standing order, render the report and persist it as
//! `<output_dir>/<pin>.txt`. Any fatal error stops the run before the file
//! is written.

use std::fs;
use tracing::{debug, info};

use crate::config::WallistConfig;
use crate::error::{Result, WallistError};
use crate::models::{DisplayClassification, PlayerRecord, RunOutcome, RunStats};
use crate::rating::{RatingLookup, StatusSink, resolve_ratings};
use crate::report::ColumnLayout;
use crate::wallist::{WallistSource, parse_wallist};

/// Check a tournament PIN before it reaches a URL or a file name
pub fn validate_tournament_id(raw: &str) -> Result<String> {
    let pin = raw.trim();

    let reason = if pin.is_empty() {
        Some("PIN is empty")
    } else if pin.chars().any(char::is_whitespace) {
        Some("PIN contains whitespace")
    } else if pin.contains(['/', '\\']) || pin.starts_with('.') {
        Some("PIN must not contain path components")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(WallistError::InvalidTournamentId {
            value: raw.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(pin.to_string()),
    }
}

/// Main processor for wallist reports
pub struct WallistProcessor<C> {
    client: C,
    config: WallistConfig,
}

impl<C> WallistProcessor<C>
where
    C: WallistSource + RatingLookup,
{
    pub fn new(client: C, config: WallistConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &WallistConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Main processing entry point
    pub fn run<S>(&self, tournament_id: &str, status: &mut S) -> Result<RunOutcome>
    where
        S: StatusSink + ?Sized,
    {
        let tournament_id = validate_tournament_id(tournament_id)?;

        let wallist = self.client.fetch_wallist(&tournament_id)?;
        info!("Wallist for {} found. Parsing rows...", tournament_id);

        let records = parse_wallist(&wallist)?;
        info!(
            "Wallist found. Total: {}. Fetching ratings...",
            records.len()
        );

        let mut stats = RunStats::default();
        let records = {
            let mut counting = |record: &PlayerRecord, classification: &DisplayClassification| {
                stats.record(classification);
                status.player(record, classification);
            };
            resolve_ratings(&tournament_id, records, &self.client, &mut counting)?
        };

        let layout = ColumnLayout::compute(&records);
        stats.round_count = layout.round_count;
        let report = layout.render(&records);
        debug!("Report layout: {:?}", layout);

        let report_path = self.config.report_path(&tournament_id);
        if !self.config.output_dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.config.output_dir)?;
        }
        fs::write(&report_path, &report)?;
        info!("Wrote {}", report_path.display());

        Ok(RunOutcome {
            report,
            report_path,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tournament_id() {
        assert_eq!(validate_tournament_id(" T230101A \n").unwrap(), "T230101A");

        for bad in ["", "   ", "T23 0101", "../etc", "a/b", "a\\b", ".hidden"] {
            assert!(
                matches!(
                    validate_tournament_id(bad),
                    Err(WallistError::InvalidTournamentId { .. })
                ),
                "'{}' should be rejected",
                bad
            );
        }
    }
}

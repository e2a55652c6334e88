//! Per-tournament rating resolution
//!
//! Attaches each player's rating for the tournament, looked up by PIN through
//! a [`RatingLookup`]. Players without a PIN are not an error: they are
//! classified and left unrated. A PIN that does not resolve is fatal.

use tracing::debug;

use crate::error::Result;
use crate::models::{DisplayClassification, PlayerRecord};

/// Source of per-tournament player ratings
pub trait RatingLookup {
    /// Rating the player entered `tournament_id` with
    fn fetch_rating(&self, tournament_id: &str, player_id: &str) -> Result<String>;
}

/// Receives the classification of every player as it is resolved
pub trait StatusSink {
    fn player(&mut self, record: &PlayerRecord, classification: &DisplayClassification);
}

/// A no-op status sink.
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn player(&mut self, _record: &PlayerRecord, _classification: &DisplayClassification) {}
}

impl<F> StatusSink for F
where
    F: FnMut(&PlayerRecord, &DisplayClassification),
{
    fn player(&mut self, record: &PlayerRecord, classification: &DisplayClassification) {
        self(record, classification)
    }
}

/// Resolve a single record, returning the enriched record and its classification
pub fn resolve_record<L: RatingLookup>(
    tournament_id: &str,
    record: PlayerRecord,
    lookup: &L,
) -> Result<(PlayerRecord, DisplayClassification)> {
    let Some(pin) = record.identifier.clone() else {
        if record.played_no_games() {
            return Ok((record, DisplayClassification::NoIdentifierNoGames));
        }
        debug!("{} played games but has no PIN", record.full_name());
        return Ok((record, DisplayClassification::NoIdentifier));
    };

    let rating = lookup.fetch_rating(tournament_id, &pin)?;
    debug!("{}: rating {} (PIN {})", record.full_name(), rating, pin);
    let classification = DisplayClassification::Resolved(rating.clone());
    Ok((record.with_rating(rating), classification))
}

/// Resolve ratings for every record, in order, one lookup at a time.
///
/// Stops at the first rating that cannot be found.
pub fn resolve_ratings<L, S>(
    tournament_id: &str,
    records: Vec<PlayerRecord>,
    lookup: &L,
    status: &mut S,
) -> Result<Vec<PlayerRecord>>
where
    L: RatingLookup,
    S: StatusSink + ?Sized,
{
    let mut enriched = Vec::with_capacity(records.len());

    for record in records {
        let (record, classification) = resolve_record(tournament_id, record, lookup)?;
        status.player(&record, &classification);
        enriched.push(record);
    }

    Ok(enriched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WallistError;
    use crate::wallist::tests::record;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct MockLookup {
        ratings: HashMap<String, String>,
        calls: RefCell<Vec<String>>,
    }

    impl MockLookup {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                ratings: entries
                    .iter()
                    .map(|(pin, rating)| (pin.to_string(), rating.to_string()))
                    .collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl RatingLookup for MockLookup {
        fn fetch_rating(&self, tournament_id: &str, player_id: &str) -> Result<String> {
            self.calls.borrow_mut().push(player_id.to_string());
            self.ratings
                .get(player_id)
                .cloned()
                .ok_or_else(|| WallistError::RatingNotFound {
                    tournament_id: tournament_id.to_string(),
                    player_id: player_id.to_string(),
                })
        }
    }

    fn with_pin(mut r: PlayerRecord, pin: &str) -> PlayerRecord {
        r.identifier = Some(pin.to_string());
        r
    }

    #[test]
    fn test_resolved_rating_is_attached() {
        let lookup = MockLookup::new(&[("111", "2150")]);
        let (rec, class) =
            resolve_record("T1", with_pin(record("1", "Smith", "John", &["2+/w"]), "111"), &lookup)
                .unwrap();

        assert_eq!(rec.rating, "2150");
        assert_eq!(class, DisplayClassification::Resolved("2150".to_string()));
    }

    #[test]
    fn test_no_pin_no_games() {
        let lookup = MockLookup::new(&[]);
        let (rec, class) =
            resolve_record("T1", record("5", "Martin", "Anne", &["0=", "0="]), &lookup).unwrap();

        assert_eq!(class, DisplayClassification::NoIdentifierNoGames);
        assert_eq!(rec.rating, "");
        assert!(lookup.calls.borrow().is_empty());
    }

    #[test]
    fn test_no_pin_with_games() {
        let lookup = MockLookup::new(&[]);
        let (rec, class) =
            resolve_record("T1", record("3", "Novak", "Petr", &["0=", "1-/w"]), &lookup).unwrap();

        assert_eq!(class, DisplayClassification::NoIdentifier);
        assert_eq!(rec.rating, "");
    }

    #[test]
    fn test_unplayed_loss_is_not_no_games() {
        let lookup = MockLookup::new(&[]);
        let (_, class) =
            resolve_record("T1", record("3", "Novak", "Petr", &["0-", "0="]), &lookup).unwrap();

        assert_eq!(class, DisplayClassification::NoIdentifier);
    }

    #[test]
    fn test_missing_rating_is_fatal_and_stops() {
        let lookup = MockLookup::new(&[("111", "2150")]);
        let records = vec![
            with_pin(record("1", "Smith", "John", &["2+/w"]), "111"),
            with_pin(record("2", "Doe", "Jane", &["1-/b"]), "222"),
            with_pin(record("3", "Roe", "Rick", &["1-/b"]), "111"),
        ];

        let result = resolve_ratings("T1", records, &lookup, &mut NullStatus);

        match result {
            Err(WallistError::RatingNotFound {
                tournament_id,
                player_id,
            }) => {
                assert_eq!(tournament_id, "T1");
                assert_eq!(player_id, "222");
            }
            other => panic!("Expected RatingNotFound, got {:?}", other),
        }
        assert_eq!(*lookup.calls.borrow(), vec!["111", "222"]);
    }

    #[test]
    fn test_resolve_ratings_keeps_order_and_reports_status() {
        let lookup = MockLookup::new(&[("111", "2150"), ("444", "1620")]);
        let records = vec![
            with_pin(record("1", "Smith", "John", &["2+/w"]), "111"),
            record("2", "Novak", "Petr", &["1-/b"]),
            record("3", "Martin", "Anne", &["0="]),
            with_pin(record("4", "Leroy", "Paul", &["1-/b"]), "444"),
        ];

        let mut seen = Vec::new();
        let mut sink = |r: &PlayerRecord, c: &DisplayClassification| {
            seen.push(format!("{}: {}", r.full_name(), c));
        };
        let enriched = resolve_ratings("T1", records, &lookup, &mut sink).unwrap();

        let ratings: Vec<&str> = enriched.iter().map(|r| r.rating.as_str()).collect();
        assert_eq!(ratings, vec!["2150", "", "", "1620"]);
        assert_eq!(
            seen,
            vec![
                "Smith John: 2150",
                "Novak Petr: no PIN",
                "Martin Anne: no PIN, no games",
                "Leroy Paul: 1620",
            ]
        );
    }
}

//! Wallist parsing
//!
//! Turns the plain-text wallist published on an EGD tournament card into an
//! ordered list of [`PlayerRecord`]s.
//!
//! - [`row`] - single row tokenising, PIN extraction and game-result detection
//!
//! Row order is the tournament standing and is preserved. Blank lines and
//! `;` comment lines are skipped; any malformed row fails the whole wallist.
//!
//! ## Usage
//!
//! ```rust
//! use egd_wallist::wallist::parse_wallist;
//!
//! let text = "; name of tournament\n1 Smith John 3k FR Pari 2+/w 3+/b |12345\n";
//! let records = parse_wallist(text)?;
//! assert_eq!(records[0].identifier.as_deref(), Some("12345"));
//! # Ok::<(), egd_wallist::error::WallistError>(())
//! ```

pub mod row;

#[cfg(test)]
pub mod tests;

use tracing::debug;

use crate::constants::COMMENT_PREFIX;
use crate::error::Result;
use crate::models::PlayerRecord;

pub use row::{is_game_result, parse_row};

/// Source of raw wallist text
pub trait WallistSource {
    /// Plain-text wallist of `tournament_id`, or `TournamentNotFound`
    fn fetch_wallist(&self, tournament_id: &str) -> Result<String>;
}

/// Parse a complete wallist text block
pub fn parse_wallist(raw_text: &str) -> Result<Vec<PlayerRecord>> {
    let mut records = Vec::new();

    for (index, line) in raw_text.lines().enumerate() {
        if is_skipped_line(line) {
            continue;
        }

        debug!("{}", line);
        records.push(row::parse_row_at(line, index + 1)?);
    }

    debug!("Parsed {} wallist rows", records.len());
    Ok(records)
}

fn is_skipped_line(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with(COMMENT_PREFIX)
}

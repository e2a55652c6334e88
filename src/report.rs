//! Fixed-width text report
//!
//! One line per player in standing order:
//! `place name rank rating game game ...`, every field left-justified,
//! space-padded to its column width and followed by a single space.
//!
//! Place, name and game columns are sized to their widest value across the
//! whole tournament; rank and rating have fixed widths. When players report
//! different numbers of rounds, only the last `round_count` results of each
//! player are shown, `round_count` being the smallest count seen.

use tracing::{debug, info};

use crate::constants::{RANK_WIDTH, RATING_WIDTH};
use crate::models::PlayerRecord;

/// Column widths and round count for a set of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnLayout {
    pub place_width: usize,
    pub name_width: usize,
    pub game_width: usize,
    pub round_count: usize,
}

impl ColumnLayout {
    pub fn compute(records: &[PlayerRecord]) -> Self {
        let mut layout = ColumnLayout::default();
        let mut round_count: Option<usize> = None;

        for record in records {
            layout.place_width = layout.place_width.max(char_len(&record.place));
            layout.name_width = layout.name_width.max(char_len(&record.full_name()));

            let rounds = record.games.len();
            match round_count {
                None => {
                    debug!("Round number set to {}", rounds);
                    round_count = Some(rounds);
                }
                Some(current) if rounds < current => {
                    info!("Round number changed to {}", rounds);
                    round_count = Some(rounds);
                }
                Some(_) => {}
            }

            let widest_game = record.games.iter().map(|g| char_len(g)).max().unwrap_or(0);
            layout.game_width = layout.game_width.max(widest_game);
        }

        layout.round_count = round_count.unwrap_or(0);
        layout
    }

    /// Render one player line, newline included
    pub fn render_line(&self, record: &PlayerRecord) -> String {
        let mut line = format!(
            "{:<pw$} {:<nw$} {:<rw$} {:<tw$} ",
            record.place,
            record.full_name(),
            record.rank,
            record.rating,
            pw = self.place_width,
            nw = self.name_width,
            rw = RANK_WIDTH,
            tw = RATING_WIDTH,
        );

        let games: String = recent_games(&record.games, self.round_count)
            .iter()
            .map(|game| format!("{:<width$} ", game, width = self.game_width))
            .collect();
        line.push_str(&games);
        line.push('\n');
        line
    }

    /// Render every record with this layout
    pub fn render(&self, records: &[PlayerRecord]) -> String {
        records.iter().map(|record| self.render_line(record)).collect()
    }
}

/// The last `round_count` games
pub fn recent_games(games: &[String], round_count: usize) -> &[String] {
    &games[games.len().saturating_sub(round_count)..]
}

/// Render the full report body
pub fn render(records: &[PlayerRecord]) -> String {
    let layout = ColumnLayout::compute(records);
    debug!("Report layout: {:?}", layout);
    layout.render(records)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

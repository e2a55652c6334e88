//! Single wallist row parsing
//!
//! A row is `place last first rank country club [results...] [|pin]`, split on
//! whitespace. Result columns are recognised by the game-result grammar; any
//! other trailing token is ignored.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{GAME_PATTERN, MIN_ROW_FIELDS, PIN_MARKER};
use crate::error::{Result, WallistError};
use crate::models::PlayerRecord;

static GAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(GAME_PATTERN).expect("valid game result regex"));

/// True if `token` starts with a game result such as `12+/w2`, `7=` or `0-`
pub fn is_game_result(token: &str) -> bool {
    GAME_RE.is_match(token)
}

/// Parse one wallist line into a [`PlayerRecord`]
pub fn parse_row(raw_line: &str) -> Result<PlayerRecord> {
    parse_row_at(raw_line, 1)
}

pub(crate) fn parse_row_at(raw_line: &str, line_number: usize) -> Result<PlayerRecord> {
    let tokens: Vec<&str> = raw_line.split_whitespace().collect();

    if tokens.len() < MIN_ROW_FIELDS {
        return Err(WallistError::MalformedRow {
            line_number,
            line: raw_line.trim().to_string(),
            fields: tokens.len(),
        });
    }

    let last_index = tokens.len() - 1;
    let (trailing_candidate, identifier) =
        split_identifier(tokens[last_index], last_index >= MIN_ROW_FIELDS);

    let games = tokens
        .iter()
        .enumerate()
        .skip(MIN_ROW_FIELDS)
        .filter_map(|(index, &token)| {
            if index == last_index {
                trailing_candidate
            } else {
                Some(token)
            }
        })
        .filter(|candidate| is_game_result(candidate))
        .map(str::to_string)
        .collect();

    Ok(PlayerRecord {
        identifier,
        place: tokens[0].to_string(),
        last_name: tokens[1].to_string(),
        first_name: tokens[2].to_string(),
        rank: tokens[3].to_string(),
        country: tokens[4].to_string(),
        club: tokens[5].to_string(),
        games,
        rating: String::new(),
    })
}

/// Split the last token into its game candidate and the player PIN.
///
/// `|12345` carries only a PIN. With `result_column` set, `0-|12345` carries
/// both the result `0-` and the PIN; any other prefix means the token holds
/// no PIN at all.
fn split_identifier(token: &str, result_column: bool) -> (Option<&str>, Option<String>) {
    let Some((prefix, pin)) = token.split_once(PIN_MARKER) else {
        return (Some(token), None);
    };

    if !prefix.is_empty() && !(result_column && is_game_result(prefix)) {
        return (Some(token), None);
    }

    let identifier = (!pin.is_empty()).then(|| pin.to_string());
    let candidate = (!prefix.is_empty()).then_some(prefix);
    (candidate, identifier)
}

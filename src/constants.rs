//! Application constants for the wallist tool
//!
//! Remote endpoints, wallist format markers and report column widths.

// =============================================================================
// European Go Database endpoints
// =============================================================================

/// Tournament card page; queried with `?key=<tournament pin>`
pub const TOURNAMENT_CARD_URL: &str = "http://www.europeangodatabase.eu/EGD/Tournament_Card.php";

/// Player card page; queried with `?key=<player pin>`
pub const PLAYER_CARD_URL: &str = "http://www.europeangodatabase.eu/EGD/Player_Card.php";

/// Element id holding the plain-text wallist on the tournament card
pub const WALLIST_ELEMENT_ID: &str = "wallist_simple";

/// Query parameter carrying the PIN on both card pages
pub const PIN_QUERY_PARAM: &str = "key";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Wallist format
// =============================================================================

/// Minimum whitespace-separated fields on a wallist row
pub const MIN_ROW_FIELDS: usize = 6;

/// Prefix marking the trailing player PIN token
pub const PIN_MARKER: char = '|';

/// Lines starting with this character are comments
pub const COMMENT_PREFIX: char = ';';

/// Game-result grammar, matched at the start of a token
pub const GAME_PATTERN: &str = r"^(?:\d+[-=+](?:/[hbw]\d?)?|0[-=+])";

/// Result token for a round the player did not play
pub const NO_GAME_MARKER: &str = "0=";

// =============================================================================
// Report layout
// =============================================================================

/// Fixed width of the rank column
pub const RANK_WIDTH: usize = 3;

/// Fixed width of the rating column
pub const RATING_WIDTH: usize = 4;

/// Extension of the persisted report file
pub const REPORT_EXTENSION: &str = "txt";

// =============================================================================
// Exit codes
// =============================================================================

/// Network, filesystem, configuration or input failure
pub const EXIT_FAILURE: i32 = 1;

/// Unknown tournament, malformed wallist row or missing rating
pub const EXIT_DATA_ERROR: i32 = 2;

// =============================================================================
// Environment overrides
// =============================================================================

pub mod env {
    pub const TOURNAMENT_CARD_URL: &str = "EGD_TOURNAMENT_CARD_URL";
    pub const PLAYER_CARD_URL: &str = "EGD_PLAYER_CARD_URL";
    pub const TIMEOUT_SECS: &str = "EGD_TIMEOUT_SECS";
}

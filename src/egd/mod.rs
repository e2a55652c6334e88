//! European Go Database adapter
//!
//! [`EgdClient`] reads the public tournament and player cards over blocking
//! HTTP and serves both collaborators of a run:
//! - [`WallistSource`] - the plain-text wallist of a tournament card
//! - [`RatingLookup`] - a player's rating for one tournament
//!
//! - [`html`] - element and table-row extraction from the returned pages

pub mod html;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::WallistConfig;
use crate::constants::{PIN_QUERY_PARAM, WALLIST_ELEMENT_ID};
use crate::error::{Result, WallistError};
use crate::rating::RatingLookup;
use crate::wallist::WallistSource;

/// Blocking HTTP client for EGD card pages
pub struct EgdClient {
    http: Client,
    tournament_card_url: String,
    player_card_url: String,
}

impl EgdClient {
    pub fn new(config: &WallistConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| WallistError::http(&config.tournament_card_url, e))?;

        Ok(Self {
            http,
            tournament_card_url: config.tournament_card_url.clone(),
            player_card_url: config.player_card_url.clone(),
        })
    }

    /// GET `url?key=<pin>` and return the body
    fn get_card(&self, url: &str, pin: &str) -> Result<String> {
        debug!("GET {}?{}={}", url, PIN_QUERY_PARAM, pin);

        self.http
            .get(url)
            .query(&[(PIN_QUERY_PARAM, pin)])
            .send()
            .and_then(|res| res.error_for_status())
            .and_then(|res| res.text())
            .map_err(|e| WallistError::http(url, e))
    }
}

impl WallistSource for EgdClient {
    fn fetch_wallist(&self, tournament_id: &str) -> Result<String> {
        let page = self.get_card(&self.tournament_card_url, tournament_id)?;

        html::element_inner_by_id(&page, WALLIST_ELEMENT_ID)
            .map(html::text_content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| WallistError::TournamentNotFound {
                tournament_id: tournament_id.to_string(),
            })
    }
}

impl RatingLookup for EgdClient {
    fn fetch_rating(&self, tournament_id: &str, player_id: &str) -> Result<String> {
        let page = self.get_card(&self.player_card_url, player_id)?;

        html::tournament_rating(&page, tournament_id).ok_or_else(|| {
            WallistError::RatingNotFound {
                tournament_id: tournament_id.to_string(),
                player_id: player_id.to_string(),
            }
        })
    }
}

//! Scryfall catalog records and the name lookup client.
//!
//! The client uses blocking reqwest; lookups are sequential and spaced out
//! to respect Scryfall's request rate guidelines.

use crate::error::{DeckError, DeckResult};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

pub const SCRYFALL_API_BASE: &str = "https://api.scryfall.com";

/// Scryfall asks clients to wait 50-100ms between requests
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

const USER_AGENT: &str = "D2D-Automations-DeckFormatter/1.0";

/// Scryfall card response.
///
/// Every field is optional: normalization substitutes defaults for
/// whatever the catalog leaves out.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ScryfallCard {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub loyalty: Option<String>,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub prices: ScryfallPrices,
    /// Present for transform, modal, split, flip and adventure cards
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
    /// Meld pieces, tokens and other cards this one refers to
    #[serde(default)]
    pub all_parts: Option<Vec<RelatedCard>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ScryfallPrices {
    pub eur: Option<String>,
    pub usd: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CardFace {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub loyalty: Option<String>,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

/// Entry of `all_parts`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RelatedCard {
    pub component: String,
    pub name: String,
}

/// Normal-size image URL out of an optional `image_uris` map
pub fn normal_image_url(uris: Option<&ImageUris>) -> Option<&str> {
    uris.and_then(|u| u.normal.as_deref())
}

/// Scryfall API error response
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ScryfallError {
    pub status: u16,
    pub code: String,
    pub details: String,
}

/// Resolves a typed card name to a catalog record.
///
/// `None` covers every failure (not found, network, bad payload); callers
/// treat them all as "no data for this card".
pub trait CardLookup {
    fn lookup(&mut self, name: &str) -> Option<ScryfallCard>;
}

/// Blocking Scryfall client with a fixed delay between requests
pub struct ScryfallClient {
    http: reqwest::blocking::Client,
    base_url: String,
    request_delay: Duration,
    last_request: Option<Instant>,
}

impl Default for ScryfallClient {
    fn default() -> Self {
        Self::new(SCRYFALL_API_BASE)
    }
}

impl ScryfallClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_delay: DEFAULT_REQUEST_DELAY,
            last_request: None,
        }
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn wait_for_rate_limit(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.request_delay {
                std::thread::sleep(self.request_delay - elapsed);
            }
        }
        self.last_request = Some(Instant::now());
    }

    /// Fetch a card from Scryfall by name (fuzzy search)
    pub fn fetch_card_by_name(&mut self, name: &str) -> DeckResult<ScryfallCard> {
        self.wait_for_rate_limit();

        let url = format!(
            "{}/cards/named?fuzzy={}",
            self.base_url,
            urlencoding::encode(name)
        );

        log::debug!("Fetching card from Scryfall: {}", url);

        let response = self
            .http
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<ScryfallCard>()?);
        }

        match response.json::<ScryfallError>() {
            Ok(error) => Err(DeckError::NotFound {
                name: name.to_string(),
                details: error.details,
            }),
            Err(_) => Err(DeckError::HttpStatus(status)),
        }
    }
}

impl CardLookup for ScryfallClient {
    fn lookup(&mut self, name: &str) -> Option<ScryfallCard> {
        match self.fetch_card_by_name(name) {
            Ok(card) => Some(card),
            Err(e) => {
                log::warn!("Lookup failed for '{}': {}", name, e);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;

//! Persistent cache for Scryfall name lookups.
//!
//! Stores raw records in a JSON file keyed by the lower-cased query name,
//! so re-running the same decklist doesn't hit the API again.

use crate::error::DeckResult;
use crate::scryfall::{CardLookup, ScryfallCard};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct CardCache {
    /// Map of lower-cased query name to card data
    cards: HashMap<String, ScryfallCard>,
    #[serde(skip)]
    path: PathBuf,
}

impl CardCache {
    /// Default cache file: <cache dir>/deck_formatter/scryfall_names.json
    pub fn default_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("deck_formatter")
            .join("scryfall_names.json")
    }

    /// Load cache from disk, or start empty if it is missing or unreadable
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut cache = if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str::<CardCache>(&content) {
                    Ok(cache) => {
                        log::info!("Loaded card cache with {} entries", cache.len());
                        cache
                    }
                    Err(e) => {
                        log::warn!("Failed to parse cache file, starting fresh: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read cache file, starting fresh: {}", e);
                    Self::default()
                }
            }
        } else {
            log::info!("Starting with empty card cache");
            Self::default()
        };
        cache.path = path;
        cache
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save cache to disk
    pub fn save(&self) -> DeckResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, content)?;

        log::debug!("Saved card cache with {} entries", self.cards.len());
        Ok(())
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }

    pub fn get(&self, name: &str) -> Option<&ScryfallCard> {
        self.cards.get(&Self::key(name))
    }

    pub fn insert(&mut self, name: &str, card: ScryfallCard) {
        self.cards.insert(Self::key(name), card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A [`CardLookup`] that checks the cache before asking `inner`
pub struct CachedLookup<L> {
    cache: CardCache,
    inner: L,
}

impl<L: CardLookup> CachedLookup<L> {
    pub fn new(cache: CardCache, inner: L) -> Self {
        Self { cache, inner }
    }

    pub fn cache(&self) -> &CardCache {
        &self.cache
    }
}

impl<L: CardLookup> CardLookup for CachedLookup<L> {
    fn lookup(&mut self, name: &str) -> Option<ScryfallCard> {
        if let Some(card) = self.cache.get(name) {
            log::debug!("Cache hit for {}", name);
            return Some(card.clone());
        }

        log::info!("Cache miss for {}, fetching from Scryfall", name);
        let card = self.inner.lookup(name)?;

        self.cache.insert(name, card.clone());
        if let Err(e) = self.cache.save() {
            log::warn!("Failed to save cache: {}", e);
        }

        Some(card)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;

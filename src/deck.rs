//! Decklist-to-report workflow: parse, look up, normalize, link melds.

use crate::formatters::{format_deck_report, ReportLayout};
use crate::models::Card;
use crate::normalizer::normalize;
use crate::parser::parse_decklist;
use crate::scryfall::CardLookup;
use std::collections::HashSet;

/// Progress notifications emitted while the deck is being resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckProgress {
    /// About to look up query `current` of `total`
    Fetching {
        current: usize,
        total: usize,
        name: String,
    },
    /// Query `current` names a card already in the deck
    Skipped {
        current: usize,
        total: usize,
        name: String,
    },
    /// Lookup returned nothing; the card is left out
    NotFound { name: String },
}

/// Look up and attach the result card for a meld piece.
///
/// Only meld parts get one; results and ordinary cards are left as they are.
pub fn link_meld_result<L: CardLookup + ?Sized>(card: &mut Card, lookup: &mut L) {
    if !card.is_meld_part() {
        return;
    }
    let Some(result_name) = card.meld_result_name().map(str::to_string) else {
        log::debug!("'{}' is a meld part without a listed result", card.name);
        return;
    };

    log::info!("Fetching meld result '{}' for '{}'", result_name, card.name);
    match lookup.lookup(&result_name) {
        Some(record) => card.attach_meld_result(normalize(&record, 1)),
        None => log::warn!("Could not resolve meld result '{}'", result_name),
    }
}

/// Resolves every entry of a decklist into a normalized card.
///
/// A query whose name matches (case-insensitively) a card already resolved
/// is skipped. Cards that cannot be found are dropped.
pub fn build_deck<L, F>(decklist: &str, lookup: &mut L, mut on_progress: F) -> Vec<Card>
where
    L: CardLookup + ?Sized,
    F: FnMut(DeckProgress),
{
    let queries = parse_decklist(decklist);
    let total = queries.len();
    log::info!("Parsed {} card entries from decklist", total);

    let mut deck = Vec::new();
    let mut processed_names: HashSet<String> = HashSet::new();

    for (idx, query) in queries.into_iter().enumerate() {
        let current = idx + 1;

        if processed_names.contains(&query.name.to_lowercase()) {
            log::debug!("Skipping {} (already handled)", query.name);
            on_progress(DeckProgress::Skipped {
                current,
                total,
                name: query.name,
            });
            continue;
        }

        on_progress(DeckProgress::Fetching {
            current,
            total,
            name: query.name.clone(),
        });

        let Some(record) = lookup.lookup(&query.name) else {
            log::warn!("No card data for '{}', leaving it out", query.name);
            on_progress(DeckProgress::NotFound { name: query.name });
            continue;
        };

        let mut card = normalize(&record, query.quantity);
        link_meld_result(&mut card, lookup);

        processed_names.insert(card.name.to_lowercase());
        deck.push(card);
    }

    log::info!("Resolved {} of {} entries", deck.len(), total);
    deck
}

/// Parses, resolves and renders a decklist in one go
pub fn process_decklist<L: CardLookup + ?Sized>(
    decklist: &str,
    lookup: &mut L,
    layout: &ReportLayout,
) -> String {
    let deck = build_deck(decklist, lookup, |_| {});
    format_deck_report(&deck, layout)
}

#[cfg(test)]
#[path = "deck_tests.rs"]
mod tests;

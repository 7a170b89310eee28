//! Decklist parsing.
//!
//! Accepts the loose formats people paste from deck builders:
//!
//! - `1x Sol Ring`
//! - `4 Command Tower`
//! - `Sol Ring`
//! - `Sol Ring (SET) 123`
//!
//! Blank lines and `//` comments are skipped, and anything that does not
//! leave a card name behind is dropped without an error.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Optional quantity (`4`, `4x`, `4X`), a lazily matched name and an
    /// optional ` (SET) 123` suffix that is thrown away.
    static ref DECK_LINE: Regex = Regex::new(r"^\s*(?:(\d+)[xX]?\s*)?(.*?)(?:\s\(.*\)\s*\d*)?$")
        .expect("valid decklist regex");
}

/// One requested card: how many copies and the name as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckQuery {
    pub quantity: u32,
    pub name: String,
}

impl DeckQuery {
    pub fn new(quantity: u32, name: impl Into<String>) -> Self {
        Self {
            quantity,
            name: name.into(),
        }
    }
}

/// Returns true for lines that never produce an entry
fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with("//")
}

fn parse_line(line: &str) -> Option<DeckQuery> {
    let caps = DECK_LINE.captures(line)?;

    let name = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
    if name.is_empty() {
        log::debug!("Dropping decklist line without a card name: {:?}", line);
        return None;
    }

    let quantity = match caps.get(1) {
        Some(qty) => match qty.as_str().parse::<u32>() {
            Ok(q) if q > 0 => q,
            _ => {
                log::debug!("Dropping decklist line with invalid quantity: {:?}", line);
                return None;
            }
        },
        None => 1,
    };

    Some(DeckQuery::new(quantity, name))
}

/// Parses a raw decklist into card queries, in input order.
///
/// Duplicates are kept; deciding what to do with them is up to the caller.
pub fn parse_decklist(text: &str) -> Vec<DeckQuery> {
    text.lines()
        .map(str::trim)
        .filter(|line| !is_skipped(line))
        .filter_map(parse_line)
        .collect()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

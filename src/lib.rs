pub mod cache;
pub mod deck;
pub mod error;
pub mod formatters;
pub mod models;
pub mod normalizer;
pub mod parser;
pub mod scryfall;

// Re-export commonly used items
pub use cache::{CachedLookup, CardCache};
pub use deck::{build_deck, link_meld_result, process_decklist, DeckProgress};
pub use error::{DeckError, DeckResult};
pub use formatters::{format_deck_as_text, format_deck_report, ReportLayout};
pub use models::{Card, CardFace, PartComponent, RelatedPart};
pub use normalizer::normalize;
pub use parser::{parse_decklist, DeckQuery};
pub use scryfall::{CardLookup, ScryfallCard, ScryfallClient};

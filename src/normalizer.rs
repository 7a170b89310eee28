//! Turns raw Scryfall records into [`Card`] entities.

use crate::models::{Card, CardFace, PartComponent, RelatedPart};
use crate::scryfall::{self, ScryfallCard};

/// Placeholder for required text fields the catalog left out
pub const MISSING_TEXT: &str = "N/A";

fn text_or_missing(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| MISSING_TEXT.to_string())
}

fn text_or_empty(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn face_from_scryfall(face: &scryfall::CardFace) -> CardFace {
    CardFace {
        name: text_or_missing(face.name.as_ref()),
        mana_cost: text_or_empty(face.mana_cost.as_ref()),
        type_line: text_or_missing(face.type_line.as_ref()),
        oracle_text: text_or_missing(face.oracle_text.as_ref()),
        power: face.power.clone(),
        toughness: face.toughness.clone(),
        loyalty: face.loyalty.clone(),
        image_url: scryfall::normal_image_url(face.image_uris.as_ref())
            .unwrap_or_default()
            .to_string(),
    }
}

/// Single face for cards without a multi-entry face list.
///
/// Name, type line and stats come from the top level. Rules text, mana cost
/// and image come from the lone nested face when there is one (adventure
/// cards), otherwise from the top level too.
fn merged_face(record: &ScryfallCard) -> CardFace {
    let nested = record.card_faces.as_deref().and_then(|faces| faces.first());

    let (mana_cost, oracle_text, image_uris) = match nested {
        Some(face) => (&face.mana_cost, &face.oracle_text, face.image_uris.as_ref()),
        None => (&record.mana_cost, &record.oracle_text, record.image_uris.as_ref()),
    };

    CardFace {
        name: text_or_missing(record.name.as_ref()),
        mana_cost: text_or_empty(mana_cost.as_ref()),
        type_line: text_or_missing(record.type_line.as_ref()),
        oracle_text: text_or_missing(oracle_text.as_ref()),
        power: record.power.clone(),
        toughness: record.toughness.clone(),
        loyalty: record.loyalty.clone(),
        image_url: scryfall::normal_image_url(image_uris)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Builds a deck entry from one catalog record.
///
/// Never fails: missing fields fall back to defaults. The meld result is
/// always left empty; linking it is the caller's job.
pub fn normalize(record: &ScryfallCard, quantity: u32) -> Card {
    let faces = match record.card_faces.as_deref() {
        Some(faces) if faces.len() > 1 => faces.iter().map(face_from_scryfall).collect(),
        _ => vec![merged_face(record)],
    };

    let mut card = Card::new(text_or_missing(record.name.as_ref()), quantity, faces);
    card.colors = record.colors.clone().unwrap_or_default();
    card.price_usd = record.prices.usd.clone();
    card.price_eur = record.prices.eur.clone();
    card.rarity = record.rarity.clone();
    card.related_parts = record.all_parts.as_ref().map(|parts| {
        parts
            .iter()
            .map(|p| RelatedPart::new(PartComponent::from_scryfall(&p.component), p.name.clone()))
            .collect()
    });
    card
}

#[cfg(test)]
#[path = "normalizer_tests.rs"]
mod tests;

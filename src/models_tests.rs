//! Unit tests for the card model and its meld helpers.

use super::*;

fn face(name: &str) -> CardFace {
    CardFace {
        name: name.to_string(),
        ..CardFace::default()
    }
}

fn card_with_parts(name: &str, parts: Vec<RelatedPart>) -> Card {
    let mut card = Card::new(name, 1, vec![face(name)]);
    card.related_parts = Some(parts);
    card
}

fn bruna() -> Card {
    card_with_parts(
        "Bruna, the Fading Light",
        vec![
            RelatedPart::new(PartComponent::MeldPart, "Bruna, the Fading Light"),
            RelatedPart::new(PartComponent::MeldPart, "Gisela, the Broken Blade"),
            RelatedPart::new(PartComponent::MeldResult, "Brisela, Voice of Nightmares"),
        ],
    )
}

#[test]
fn component_parses_known_and_unknown_strings() {
    assert_eq!(PartComponent::from_scryfall("meld_part"), PartComponent::MeldPart);
    assert_eq!(PartComponent::from_scryfall("meld_result"), PartComponent::MeldResult);
    assert_eq!(
        PartComponent::from_scryfall("combo_piece"),
        PartComponent::Other("combo_piece".to_string())
    );
    assert_eq!(PartComponent::from_scryfall("token").as_str(), "token");
}

#[test]
fn meld_part_helpers() {
    let card = bruna();
    assert!(card.is_meld_card());
    assert!(card.is_meld_part());
    assert!(!card.is_meld_result());
    assert_eq!(card.meld_partner_name(), Some("Gisela, the Broken Blade"));
    assert_eq!(card.meld_result_name(), Some("Brisela, Voice of Nightmares"));
}

#[test]
fn meld_result_helpers() {
    let card = card_with_parts(
        "Brisela, Voice of Nightmares",
        vec![
            RelatedPart::new(PartComponent::MeldPart, "Bruna, the Fading Light"),
            RelatedPart::new(PartComponent::MeldResult, "Brisela, Voice of Nightmares"),
            RelatedPart::new(PartComponent::MeldPart, "Gisela, the Broken Blade"),
        ],
    );
    assert!(card.is_meld_result());
    assert_eq!(
        card.meld_part_names(),
        vec!["Bruna, the Fading Light", "Gisela, the Broken Blade"]
    );
}

#[test]
fn token_relationships_are_not_meld() {
    let card = card_with_parts(
        "Young Pyromancer",
        vec![
            RelatedPart::new(PartComponent::Other("combo_piece".into()), "Young Pyromancer"),
            RelatedPart::new(PartComponent::Other("token".into()), "Elemental"),
        ],
    );
    assert!(!card.is_meld_card());
    assert!(!card.is_meld_part());
    assert_eq!(card.meld_result_name(), None);
}

#[test]
fn card_without_parts_is_not_meld() {
    let card = Card::new("Opt", 1, vec![face("Opt")]);
    assert!(!card.is_meld_card());
    assert!(card.meld_part_names().is_empty());
    assert!(card.meld_result_card().is_none());
}

#[test]
fn attach_meld_result_keeps_single_level() {
    let mut inner = Card::new("Brisela, Voice of Nightmares", 1, vec![face("Brisela")]);
    inner.attach_meld_result(Card::new("Something Else", 1, vec![face("Something Else")]));
    assert!(inner.meld_result_card().is_some());

    let mut card = bruna();
    card.attach_meld_result(inner);

    let attached = card.meld_result_card().unwrap();
    assert_eq!(attached.name, "Brisela, Voice of Nightmares");
    assert!(attached.meld_result_card().is_none());
}

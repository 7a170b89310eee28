/// Role a card plays in a multi-card relationship (Scryfall `all_parts`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartComponent {
    MeldPart,
    MeldResult,
    /// Tokens, combo pieces and anything else; kept verbatim
    Other(String),
}

impl PartComponent {
    /// Parse a Scryfall component string (e.g., "meld_part")
    pub fn from_scryfall(component: &str) -> Self {
        match component {
            "meld_part" => PartComponent::MeldPart,
            "meld_result" => PartComponent::MeldResult,
            other => PartComponent::Other(other.to_string()),
        }
    }

    /// Returns the Scryfall component string
    pub fn as_str(&self) -> &str {
        match self {
            PartComponent::MeldPart => "meld_part",
            PartComponent::MeldResult => "meld_result",
            PartComponent::Other(s) => s,
        }
    }

    pub fn is_meld(&self) -> bool {
        matches!(self, PartComponent::MeldPart | PartComponent::MeldResult)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedPart {
    pub component: PartComponent,
    pub name: String,
}

impl RelatedPart {
    pub fn new(component: PartComponent, name: impl Into<String>) -> Self {
        Self {
            component,
            name: name.into(),
        }
    }
}

/// One printed face of a card
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardFace {
    pub name: String,
    pub mana_cost: String,
    pub type_line: String,
    pub oracle_text: String,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loyalty: Option<String>,
    pub image_url: String,
}

/// One deck entry, normalized from a catalog record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    /// Single-letter color codes in catalog order; empty means colorless
    pub colors: Vec<String>,
    pub quantity: u32,
    pub price_usd: Option<String>,
    pub price_eur: Option<String>,
    pub rarity: Option<String>,
    /// Never empty when built by the normalizer; face 0 is the front
    pub faces: Vec<CardFace>,
    pub related_parts: Option<Vec<RelatedPart>>,
    meld_result_card: Option<Box<Card>>,
}

impl Card {
    pub fn new(name: impl Into<String>, quantity: u32, faces: Vec<CardFace>) -> Self {
        Self {
            name: name.into(),
            colors: Vec::new(),
            quantity,
            price_usd: None,
            price_eur: None,
            rarity: None,
            faces,
            related_parts: None,
            meld_result_card: None,
        }
    }

    pub fn front_face(&self) -> Option<&CardFace> {
        self.faces.first()
    }

    /// True only for meld pieces and meld results; other `all_parts`
    /// relationships (tokens, combo pieces) don't count.
    pub fn is_meld_card(&self) -> bool {
        self.related_parts
            .as_deref()
            .is_some_and(|parts| parts.iter().any(|p| p.component.is_meld()))
    }

    /// True when `related_parts` lists this card itself as a meld piece
    pub fn is_meld_part(&self) -> bool {
        self.has_related(&PartComponent::MeldPart, &self.name)
    }

    /// True when `related_parts` lists this card itself as the meld result
    pub fn is_meld_result(&self) -> bool {
        self.has_related(&PartComponent::MeldResult, &self.name)
    }

    fn has_related(&self, component: &PartComponent, name: &str) -> bool {
        self.related_parts
            .as_deref()
            .is_some_and(|parts| {
                parts
                    .iter()
                    .any(|p| &p.component == component && p.name == name)
            })
    }

    /// Name of the card this one melds into, if listed
    pub fn meld_result_name(&self) -> Option<&str> {
        self.related_parts.as_deref().and_then(|parts| {
            parts
                .iter()
                .find(|p| p.component == PartComponent::MeldResult)
                .map(|p| p.name.as_str())
        })
    }

    /// Name of the other meld piece, if listed
    pub fn meld_partner_name(&self) -> Option<&str> {
        self.related_parts.as_deref().and_then(|parts| {
            parts
                .iter()
                .find(|p| p.component == PartComponent::MeldPart && p.name != self.name)
                .map(|p| p.name.as_str())
        })
    }

    /// Names of every meld piece, in catalog order
    pub fn meld_part_names(&self) -> Vec<&str> {
        self.related_parts
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|p| p.component == PartComponent::MeldPart)
            .map(|p| p.name.as_str())
            .collect()
    }

    pub fn meld_result_card(&self) -> Option<&Card> {
        self.meld_result_card.as_deref()
    }

    /// Attach the resolved meld result.
    ///
    /// Nesting stays one level deep: any result card already hanging off
    /// `result` is dropped.
    pub fn attach_meld_result(&mut self, mut result: Card) {
        if result.meld_result_card.take().is_some() {
            log::debug!(
                "Dropping nested meld result under '{}' attached to '{}'",
                result.name,
                self.name
            );
        }
        self.meld_result_card = Some(Box::new(result));
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

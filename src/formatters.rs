//! Fixed-width text report for a resolved deck.
//!
//! Output is a pure function of the cards and the [`ReportLayout`]: the
//! same input always renders byte-identical text.

use crate::models::{Card, CardFace};

pub const REPORT_TITLE: &str = "MTG DECKLIST REPORT";
pub const MELD_HEADER: &str = "~ Meld Information ~";
pub const MELD_INCOMPLETE: &str = "Meld data is incomplete.";

const RULE_CHAR: char = '─';
const FACE_LABEL_FILL: char = '-';
const CARD_SEPARATOR: &str = "• • •";
const BULLET_GLYPHS: [char; 3] = ['•', '-', '–'];

/// Widths and indents used by the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLayout {
    /// Total line width
    pub width: usize,
    /// Paragraphs wrap at `width - paragraph_margin`
    pub paragraph_margin: usize,
    /// Indent of type lines and plain rules text
    pub text_indent: usize,
    /// Spaces before a bullet glyph; continuation lines align after "• "
    pub bullet_indent: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            width: 72,
            paragraph_margin: 4,
            text_indent: 2,
            bullet_indent: 4,
        }
    }
}

impl ReportLayout {
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn wrap_width(&self) -> usize {
        self.width.saturating_sub(self.paragraph_margin)
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn spaces(n: usize) -> String {
    " ".repeat(n)
}

/// Greedy word wrap. Words are never split, so a word longer than the
/// line sits on a line of its own. Empty text gives one empty line.
pub fn wrap_text(
    text: &str,
    width: usize,
    initial_indent: &str,
    subsequent_indent: &str,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = initial_indent.to_string();
    let mut current_len = char_len(initial_indent);
    let mut has_word = false;

    for word in text.split_whitespace() {
        let word_len = char_len(word);
        if has_word && current_len + 1 + word_len > width {
            lines.push(std::mem::replace(&mut current, subsequent_indent.to_string()));
            current_len = char_len(subsequent_indent);
            has_word = false;
        }
        if has_word {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
        has_word = true;
    }

    if has_word {
        lines.push(current);
    } else if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Whether the header should spell out the card's colors.
///
/// Colors are implied by the mana cost, so they are only shown when there
/// is no cost to read them from, when the card is colorless, or when
/// Devoid makes the cost misleading.
pub fn should_display_colors(card: &Card) -> bool {
    let Some(front) = card.front_face() else {
        return true;
    };
    card.colors.is_empty()
        || (front.mana_cost.trim().is_empty() && !card.colors.is_empty())
        || front.oracle_text.contains("Devoid")
}

pub fn format_colors(colors: &[String]) -> String {
    if colors.is_empty() {
        "Colorless".to_string()
    } else {
        colors.join(", ")
    }
}

fn face_label(face: &CardFace, index: usize) -> String {
    let side = if index == 0 { "Front Face" } else { "Back Face" };
    format!("{} ({})", face.name, side)
}

struct ReportBuilder<'a> {
    layout: &'a ReportLayout,
    lines: Vec<String>,
}

impl<'a> ReportBuilder<'a> {
    fn new(layout: &'a ReportLayout) -> Self {
        Self {
            layout,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn rule(&self) -> String {
        RULE_CHAR.to_string().repeat(self.layout.width)
    }

    fn center(&self, text: &str, fill: char) -> String {
        let width = self.layout.width;
        let title = format!(" {} ", text.trim());
        let len = char_len(&title);
        if len >= width {
            return title.chars().take(width).collect();
        }
        let side = (width - len) / 2;
        let fill = fill.to_string();
        format!("{}{}{}", fill.repeat(side), title, fill.repeat(width - len - side))
    }

    /// `left` flush left and `right` flush against the line width.
    /// Parts that don't fit keep a single space between them.
    fn justify(&self, left: &str, right: &str) -> String {
        let used = char_len(left) + char_len(right);
        if right.is_empty() {
            format!("{left}{}", spaces(self.layout.width.saturating_sub(used)))
        } else if used < self.layout.width {
            format!("{left}{}{right}", spaces(self.layout.width - used))
        } else {
            format!("{left} {right}")
        }
    }

    fn title_block(&mut self, cards: &[Card]) {
        let total_cards: u64 = cards.iter().map(|c| u64::from(c.quantity)).sum();
        let summary = format!(
            "Total Cards: {total_cards}   •   Unique Cards: {}",
            cards.len()
        );

        let rule = self.rule();
        let title = self.center(REPORT_TITLE, ' ');
        let summary = self.center(&summary, ' ');
        self.push(rule.clone());
        self.push(title);
        self.push(summary);
        self.push(rule);
        self.blank();
    }

    fn card_separator(&mut self) {
        let separator = self.center(CARD_SEPARATOR, ' ');
        self.blank();
        self.push(separator);
        self.blank();
    }

    fn card_header(&mut self, card: &Card) {
        let front = card.front_face();
        let mana_cost = front.map(|f| f.mana_cost.trim()).unwrap_or("");
        let type_line = front.map(|f| f.type_line.as_str()).unwrap_or("");

        let qty_name = format!("{}x {}", card.quantity, card.name);
        let header = self.justify(&qty_name, mana_cost);
        self.push(header);

        let type_row = format!("{}{}", spaces(self.layout.text_indent), type_line);
        if should_display_colors(card) {
            let colors = format!("Colors: {}", format_colors(&card.colors));
            let row = self.justify(&type_row, &colors);
            self.push(row);
        } else {
            self.push(type_row);
        }
    }

    fn rules_text(&mut self, oracle_text: &str) {
        let wrap_width = self.layout.wrap_width();
        let text_indent = spaces(self.layout.text_indent);

        for segment in oracle_text.split('\n').map(str::trim) {
            if segment.is_empty() {
                continue;
            }
            let wrapped = match segment.chars().next() {
                Some(glyph) if BULLET_GLYPHS.contains(&glyph) => {
                    let rest = segment[glyph.len_utf8()..].trim_start();
                    let first = format!("{}{} ", spaces(self.layout.bullet_indent), glyph);
                    let continuation = spaces(self.layout.bullet_indent + 2);
                    wrap_text(rest, wrap_width, &first, &continuation)
                }
                _ => wrap_text(segment, wrap_width, &text_indent, &text_indent),
            };
            self.lines.extend(wrapped);
        }
    }

    fn face_block(&mut self, face: &CardFace, index: usize, face_count: usize) {
        if face_count > 1 {
            let label = self.center(&face_label(face, index), FACE_LABEL_FILL);
            self.blank();
            self.push(label);

            // The header only shows the front; back faces get their own type row.
            if index > 0 {
                let type_row = format!("{}{}", spaces(self.layout.text_indent), face.type_line);
                let mana_cost = face.mana_cost.trim();
                if mana_cost.is_empty() {
                    self.push(type_row);
                } else {
                    let row = self.justify(&type_row, mana_cost);
                    self.push(row);
                }
            }
        }

        let mut stats_shown = false;
        if let (Some(power), Some(toughness)) = (&face.power, &face.toughness) {
            self.push(format!("P/T: {power}/{toughness}"));
            stats_shown = true;
        }
        if let Some(loyalty) = &face.loyalty {
            self.push(format!("Loyalty: {loyalty}"));
            stats_shown = true;
        }

        if !face.oracle_text.trim().is_empty() {
            if !stats_shown {
                self.blank();
            }
            self.push("Text:");
            self.rules_text(&face.oracle_text);
        }
    }

    /// Header and faces, without any meld information
    fn card_details(&mut self, card: &Card) {
        self.card_header(card);
        let face_count = card.faces.len();
        for (index, face) in card.faces.iter().enumerate() {
            self.face_block(face, index, face_count);
        }
    }

    fn meld_section(&mut self, card: &Card) {
        self.blank();
        self.push(MELD_HEADER);

        if card.is_meld_result() {
            self.push("  This is the result of melding:");
            for part in card.meld_part_names() {
                self.push(format!("    • {part}"));
            }
        } else {
            match (card.meld_partner_name(), card.meld_result_name()) {
                (Some(partner), Some(result)) => {
                    self.push(format!("  Melds with: {partner}"));
                    self.push(format!("  To become: {result}"));
                }
                _ => self.push(format!("  {MELD_INCOMPLETE}")),
            }
        }

        // Nested card: details only, never another meld section.
        if let Some(result_card) = card.meld_result_card() {
            self.blank();
            let rule = self.rule();
            self.push(rule);
            self.card_details(result_card);
        }
    }

    fn card(&mut self, card: &Card) {
        self.card_details(card);
        if card.is_meld_card() {
            self.meld_section(card);
        }
    }

    fn finish(mut self) -> String {
        while self.lines.last().is_some_and(|l| l.trim().is_empty()) {
            self.lines.pop();
        }
        self.blank();
        self.lines.join("\n")
    }
}

/// Renders the deck report with an explicit layout
pub fn format_deck_report(cards: &[Card], layout: &ReportLayout) -> String {
    let mut report = ReportBuilder::new(layout);
    report.title_block(cards);

    for (idx, card) in cards.iter().enumerate() {
        if idx > 0 {
            report.card_separator();
        }
        report.card(card);
    }

    report.finish()
}

/// Renders the deck report at the default 72-column layout
pub fn format_deck_as_text(cards: &[Card]) -> String {
    format_deck_report(cards, &ReportLayout::default())
}

#[cfg(test)]
#[path = "formatters_tests.rs"]
mod tests;

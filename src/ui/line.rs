//! Ordered, styled segment accumulation.
//!
//! A cell is pushed as a run of attribute markers, a background
//! marker, a foreground marker, the text, and a terminating reset.
//! The reset is unconditional, so attributes never leak across cell
//! boundaries.

use crossterm::style::{Attribute, Color};
use tracing::warn;

/// One element of the renderable sequence handed to the output sink.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatItem {
    Attribute(Attribute),
    Background(Color),
    Foreground(Color),
    Text(String),
    Reset,
}

/// Recognized style-attribute names and their terminal attributes.
pub const ATTRIBUTE_REGISTRY: &[(&str, Attribute)] = &[
    ("bold", Attribute::Bold),
    ("half", Attribute::Dim),
    ("normal", Attribute::NormalIntensity),
    ("italic", Attribute::Italic),
    ("no_italic", Attribute::NoItalic),
    ("underline", Attribute::Underlined),
    ("underline_double", Attribute::DoubleUnderlined),
    ("underline_curly", Attribute::Undercurled),
    ("underline_dashed", Attribute::Underdashed),
    ("underline_dotted", Attribute::Underdotted),
    ("underline_none", Attribute::NoUnderline),
];

fn lookup_attribute(name: &str) -> Option<Attribute> {
    ATTRIBUTE_REGISTRY
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, a)| *a)
}

fn valid_names() -> String {
    ATTRIBUTE_REGISTRY
        .iter()
        .map(|(n, _)| *n)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Accumulates one render pass worth of styled cells.
#[derive(Debug, Default)]
pub struct LineBuilder {
    items: Vec<FormatItem>,
}

impl LineBuilder {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append one styled cell. Every requested attribute name is
    /// validated before any is applied; a single unknown name makes
    /// the whole call a no-op and logs the valid names.
    pub fn push<S: AsRef<str>>(&mut self, bg: Color, fg: Color, text: &str, attributes: &[S]) {
        let mut resolved = Vec::with_capacity(attributes.len());
        for name in attributes {
            match lookup_attribute(name.as_ref()) {
                Some(attr) => resolved.push(attr),
                None => {
                    warn!(
                        attribute = name.as_ref(),
                        valid = %valid_names(),
                        "unrecognized style attribute, cell skipped"
                    );
                    return;
                }
            }
        }

        for attr in resolved {
            self.items.push(FormatItem::Attribute(attr));
        }
        self.items.push(FormatItem::Background(bg));
        self.items.push(FormatItem::Foreground(fg));
        self.items.push(FormatItem::Text(text.to_string()));
        self.items.push(FormatItem::Reset);
    }

    /// The accumulated sequence, unmutated.
    pub fn draw(&self) -> &[FormatItem] {
        &self.items
    }

    /// Empty the sequence for reuse on the next tick.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::Rgb { r: 10, g: 10, b: 10 };
    const FG: Color = Color::Rgb { r: 200, g: 200, b: 200 };

    const NO_ATTRS: &[&str] = &[];

    // ── push ──────────────────────────────────────────────────────

    #[test]
    fn push_without_attributes() {
        let mut line = LineBuilder::new();
        line.push(BG, FG, "hi", NO_ATTRS);
        assert_eq!(
            line.draw(),
            &[
                FormatItem::Background(BG),
                FormatItem::Foreground(FG),
                FormatItem::Text("hi".to_string()),
                FormatItem::Reset,
            ]
        );
    }

    #[test]
    fn push_with_attributes_precedes_colors() {
        let mut line = LineBuilder::new();
        line.push(BG, FG, "x", &["bold", "italic"]);
        assert_eq!(
            line.draw(),
            &[
                FormatItem::Attribute(Attribute::Bold),
                FormatItem::Attribute(Attribute::Italic),
                FormatItem::Background(BG),
                FormatItem::Foreground(FG),
                FormatItem::Text("x".to_string()),
                FormatItem::Reset,
            ]
        );
    }

    #[test]
    fn every_cell_ends_with_reset() {
        let mut line = LineBuilder::new();
        line.push(BG, FG, "a", &["bold"]);
        line.push(BG, FG, "b", NO_ATTRS);
        line.push(BG, FG, "c", &["underline_curly"]);
        let items = line.draw();
        assert_eq!(items.last(), Some(&FormatItem::Reset));
        assert_eq!(
            items.iter().filter(|i| **i == FormatItem::Reset).count(),
            3
        );
    }

    #[test]
    fn attribute_always_followed_by_cell_body() {
        let mut line = LineBuilder::new();
        line.push(BG, FG, "a", &["bold", "half"]);
        line.push(BG, FG, "b", NO_ATTRS);
        let items = line.draw();
        for (i, item) in items.iter().enumerate() {
            if let FormatItem::Attribute(_) = item {
                // Next non-attribute item must be a background marker.
                let next = items[i + 1..]
                    .iter()
                    .find(|it| !matches!(it, FormatItem::Attribute(_)))
                    .unwrap();
                assert!(matches!(next, FormatItem::Background(_)));
            }
        }
    }

    // ── invalid attributes ────────────────────────────────────────

    #[test]
    fn unknown_attribute_is_a_whole_call_no_op() {
        let mut line = LineBuilder::new();
        line.push(BG, FG, "kept", NO_ATTRS);
        let before = line.draw().to_vec();
        line.push(BG, FG, "x", &["NotARealAttribute"]);
        assert_eq!(line.draw(), &before[..]);
    }

    #[test]
    fn mixed_valid_and_invalid_applies_nothing() {
        let mut line = LineBuilder::new();
        line.push(BG, FG, "x", &["bold", "sparkle"]);
        assert!(line.draw().is_empty());
    }

    #[test]
    fn registry_resolves_every_documented_name() {
        for (name, _) in ATTRIBUTE_REGISTRY {
            assert!(lookup_attribute(name).is_some(), "missing: {}", name);
        }
        assert!(lookup_attribute("blink").is_none());
    }

    // ── draw / clear ──────────────────────────────────────────────

    #[test]
    fn draw_does_not_mutate() {
        let mut line = LineBuilder::new();
        line.push(BG, FG, "a", NO_ATTRS);
        let first = line.draw().to_vec();
        let second = line.draw().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn clear_empties_for_reuse() {
        let mut line = LineBuilder::new();
        line.push(BG, FG, "a", NO_ATTRS);
        line.clear();
        assert!(line.draw().is_empty());
        line.push(BG, FG, "b", NO_ATTRS);
        assert_eq!(line.draw().len(), 4);
    }
}

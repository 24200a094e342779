//! Guarding a reserved character around a highlighter.
//!
//! Razor treats `@` as its transition character, and the highlighter does not
//! understand it. Before highlighting, every `@` is swapped for a placeholder;
//! afterwards the placeholder is turned into the `&#64;` entity so the
//! generated page never contains a raw `@` from example markup.

use crate::traits::{HighlightedFragment, Highlighter, Language};

/// Placeholder standing in for the reserved character during highlighting.
///
/// Plain ASCII letters only, so tokenizers keep it as one word.
pub const PLACEHOLDER: &str = "RazordocReservedCharPlaceholderQx";

/// Substitutes a reserved character before highlighting and restores it as an
/// HTML entity afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeGuard {
    reserved: char,
    placeholder: &'static str,
}

impl Default for EscapeGuard {
    fn default() -> Self {
        Self::razor()
    }
}

impl EscapeGuard {
    /// Guard for the Razor transition character `@`.
    pub fn razor() -> Self {
        Self::new('@', PLACEHOLDER)
    }

    /// Guard an arbitrary character with the given placeholder.
    ///
    /// The placeholder must not contain the reserved character.
    pub fn new(reserved: char, placeholder: &'static str) -> Self {
        debug_assert!(!placeholder.contains(reserved));
        Self {
            reserved,
            placeholder,
        }
    }

    /// The reserved character.
    pub fn reserved(&self) -> char {
        self.reserved
    }

    /// Numeric HTML entity of the reserved character (e.g., `&#64;`).
    pub fn entity(&self) -> String {
        format!("&#{};", self.reserved as u32)
    }

    /// Replace every reserved character with the placeholder.
    pub fn protect(&self, source: &str) -> String {
        source.replace(self.reserved, self.placeholder)
    }

    /// Replace every placeholder with the entity.
    pub fn restore(&self, html: &str) -> String {
        html.replace(self.placeholder, &self.entity())
    }

    /// Replace raw reserved characters in already-highlighted HTML with the entity.
    pub fn escape(&self, html: &str) -> String {
        html.replace(self.reserved, &self.entity())
    }

    /// Highlight `source` with the reserved character protected.
    pub fn highlight(
        &self,
        highlighter: &dyn Highlighter,
        source: &str,
        language: Language,
    ) -> HighlightedFragment {
        let html = highlighter.highlight(&self.protect(source), language);
        HighlightedFragment::new(language, self.restore(&html))
    }
}

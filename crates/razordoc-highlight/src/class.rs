//! Built-in highlighter producing semantic class spans.

use crate::csharp::highlight_csharp;
use crate::markup::highlight_markup;
use crate::traits::{Highlighter, Language};

/// Highlighter emitting ColorCode-style class names (`htmlElementName`,
/// `htmlAttributeValue`, `keyword`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassHighlighter;

impl ClassHighlighter {
    /// Create a new highlighter.
    pub fn new() -> Self {
        Self
    }
}

impl Highlighter for ClassHighlighter {
    fn name(&self) -> &'static str {
        "class"
    }

    fn highlight(&self, source: &str, language: Language) -> String {
        let body = match language {
            Language::Markup => highlight_markup(source),
            Language::CSharp => highlight_csharp(source),
        };
        format!(
            "<div class=\"{}\"><pre>{}</pre></div>",
            language.css_class(),
            body
        )
    }
}

/// Escape text for inclusion in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap escaped text in a class span.
pub(crate) fn span(class: &str, text: &str) -> String {
    format!("<span class=\"{}\">{}</span>", class, escape_html(text))
}

//! Trait definitions for highlighting services.

/// Language a fragment is highlighted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Component markup (HTML with Razor syntax)
    Markup,
    /// C# code-behind
    CSharp,
}

impl Language {
    /// CSS class used on the wrapper of highlighted output.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Markup => "html",
            Self::CSharp => "csharp",
        }
    }
}

/// Highlighted HTML together with the language it was produced for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedFragment {
    language: Language,
    html: String,
}

impl HighlightedFragment {
    /// Wrap highlighted HTML.
    pub fn new(language: Language, html: String) -> Self {
        Self { language, html }
    }

    /// Language the fragment was highlighted as.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The highlighted HTML.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Consume the fragment, returning its HTML.
    pub fn into_html(self) -> String {
        self.html
    }
}

/// A syntax highlighting engine.
///
/// Implementations turn source text into HTML where every token of interest
/// is wrapped in a `<span class="...">` naming its role. All text must come
/// out HTML-escaped.
pub trait Highlighter: Send + Sync {
    /// Engine identifier (e.g., "class")
    fn name(&self) -> &'static str;

    /// Highlight `source` as `language`.
    fn highlight(&self, source: &str, language: Language) -> String;

    /// Highlight `source` and tag the result with its language.
    fn fragment(&self, source: &str, language: Language) -> HighlightedFragment {
        HighlightedFragment::new(language, self.highlight(source, language))
    }
}

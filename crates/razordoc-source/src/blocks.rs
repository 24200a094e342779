//! Splitting example source into markup and code-behind sections.

/// Token that introduces the code-behind section of an example.
pub const CODE_MARKER: &str = "@code";

/// An example split at the first code marker.
///
/// The marker itself belongs to neither half. Content is not validated, so a
/// marker inside a string literal or comment produces a wrong split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBlocks {
    /// Markup section (everything before the marker)
    pub markup: String,

    /// Code-behind section (everything after the marker)
    pub code: Option<String>,
}

impl SourceBlocks {
    /// Split stripped source at the first occurrence of [`CODE_MARKER`].
    pub fn split(source: &str) -> Self {
        match source.split_once(CODE_MARKER) {
            Some((markup, code)) => Self {
                markup: markup.to_string(),
                code: Some(code.to_string()),
            },
            None => Self {
                markup: source.to_string(),
                code: None,
            },
        }
    }

    /// Number of blocks (1 for markup only, 2 with a code-behind section).
    pub fn len(&self) -> usize {
        if self.code.is_some() {
            2
        } else {
            1
        }
    }

    /// Always false; a split yields at least the markup block.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The code-behind block with the marker put back in front, ready to be
    /// highlighted as code.
    pub fn code_with_marker(&self) -> Option<String> {
        self.code
            .as_ref()
            .map(|code| format!("{}{}", CODE_MARKER, code))
    }
}

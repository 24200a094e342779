//! Highlighted markup files for examples.

use serde::Serialize;

use razordoc_highlight::{postprocess_attributes, EscapeGuard, Highlighter, Language};
use razordoc_source::ExampleSource;

use crate::templates::{TemplateEngine, MARKUP};

/// Settings for generated markup files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSettings {
    /// Namespace declared by every generated markup file
    pub namespace: String,

    /// CSS class of the wrapper element
    pub wrapper_class: String,
}

impl Default for MarkupSettings {
    fn default() -> Self {
        Self {
            namespace: "MudBlazor.Docs.Examples.Markup".to_string(),
            wrapper_class: "mud-codeblock".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct MarkupContext<'a> {
    namespace: &'a str,
    wrapper_class: &'a str,
    markup: String,
    code: Option<String>,
}

/// Render the generated markup file for one example.
///
/// The markup block is highlighted with `@` guarded, then its attribute
/// values are re-classified. The code-behind block, if any, is highlighted
/// with the marker put back and every `@` in it turned into an entity.
pub fn render_markup(
    example: &ExampleSource,
    highlighter: &dyn Highlighter,
    templates: &TemplateEngine,
    settings: &MarkupSettings,
) -> Result<String, minijinja::Error> {
    let guard = EscapeGuard::razor();
    let blocks = example.blocks();

    let markup = guard.highlight(highlighter, &blocks.markup, Language::Markup);
    let markup = postprocess_attributes(markup.html());

    let code = blocks
        .code_with_marker()
        .map(|code| guard.escape(&highlighter.highlight(&code, Language::CSharp)));

    templates.render(
        MARKUP,
        &MarkupContext {
            namespace: &settings.namespace,
            wrapper_class: &settings.wrapper_class,
            markup,
            code,
        },
    )
}

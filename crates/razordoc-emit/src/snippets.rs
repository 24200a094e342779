//! Legacy snippets class holding the raw source of every example.

use std::path::PathBuf;

use serde::Serialize;

use razordoc_source::ExampleSource;

use crate::templates::{TemplateEngine, SNIPPETS};

/// Settings for the snippets class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSettings {
    /// Snippets file to overwrite
    pub file: PathBuf,

    /// Namespace of the `Snippets` class
    pub namespace: String,
}

impl Default for SnippetSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("src/MudBlazor.Docs/Models/Snippets.generated.cs"),
            namespace: "MudBlazor.Docs.Models".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Snippet {
    name: String,
    source: String,
}

#[derive(Debug, Serialize)]
struct SnippetsContext<'a> {
    namespace: &'a str,
    snippets: Vec<Snippet>,
}

/// Body of one snippet constant: stripped source as a markdown fence, with
/// the code-behind in its own `csharp` fence and quotes doubled for a C#
/// verbatim string.
pub fn snippet_source(example: &ExampleSource) -> String {
    let blocks = example.blocks();
    let source = match blocks.code_with_marker() {
        Some(code) => format!("{}```\n\n```csharp\n{}", blocks.markup, code),
        None => blocks.markup,
    };
    source.replace('"', "\"\"")
}

/// Render the snippets class for the given examples.
pub fn render_snippets(
    examples: &[ExampleSource],
    templates: &TemplateEngine,
    settings: &SnippetSettings,
) -> Result<String, minijinja::Error> {
    let snippets = examples
        .iter()
        .map(|example| Snippet {
            name: example.component_name.clone(),
            source: snippet_source(example),
        })
        .collect();

    templates.render(
        SNIPPETS,
        &SnippetsContext {
            namespace: &settings.namespace,
            snippets,
        },
    )
}

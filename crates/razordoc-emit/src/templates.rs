//! Templates for generated files.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

/// Template name of a generated markup file.
pub const MARKUP: &str = "markup.razor";

/// Template name of the generated test suite.
pub const TEST_SUITE: &str = "suite.cs";

/// Template name of the legacy snippets class.
pub const SNIPPETS: &str = "snippets.cs";

/// First line of every generated markup file.
pub const MARKUP_HEADER: &str = "@* Auto-generated markup. Any changes will be overwritten *@";

/// First line of every generated C# file.
pub const CODE_HEADER: &str = "// NOTE: this file is autogenerated. Any changes will be overwritten!";

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Generated sources are not HTML documents; content is already escaped.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        env.add_template_owned(MARKUP.to_string(), markup_template())
            .expect("Failed to add markup template");

        env.add_template_owned(TEST_SUITE.to_string(), test_suite_template())
            .expect("Failed to add test suite template");

        env.add_template_owned(SNIPPETS.to_string(), snippets_template())
            .expect("Failed to add snippets template");

        Self { env }
    }

    /// Render a template with the given context.
    pub fn render<S: Serialize>(&self, template: &str, context: &S) -> Result<String, minijinja::Error> {
        self.env.get_template(template)?.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn markup_template() -> String {
    format!("{}\n{}", MARKUP_HEADER, MARKUP_TEMPLATE)
}

fn test_suite_template() -> String {
    format!("{}\n{}", CODE_HEADER, TEST_SUITE_TEMPLATE)
}

fn snippets_template() -> String {
    format!("{}\n{}", CODE_HEADER, SNIPPETS_TEMPLATE)
}

const MARKUP_TEMPLATE: &str = r#"@namespace {{ namespace }}
<div class="{{ wrapper_class }}">
{{ markup }}
{% if code %}
{{ code }}
{% endif %}
</div>
"#;

const TEST_SUITE_TEMPLATE: &str = r#"{% for name in usings %}
using {{ name }};
{% endfor %}

namespace {{ namespace }}
{
    [TestFixture]
    public class {{ class_name }}
    {
        // These tests just check if all the examples from the doc page render without errors
{% for component in components %}

        [Test]
        public void {{ component }}_Test()
        {
            using var ctx = new Bunit.TestContext();
            ctx.Services.AddSingleton<NavigationManager>(new MockNavigationManager());
            ctx.Services.AddSingleton<IDialogService>(new DialogService());
            var comp = ctx.RenderComponent<{{ component }}>();
        }
{% endfor %}
    }
}
"#;

const SNIPPETS_TEMPLATE: &str = r#"namespace {{ namespace }}
{
    public static partial class Snippets
    {
{% for snippet in snippets %}
        public const string {{ snippet.name }} = @"```html
{{ snippet.source }}
```";
{% endfor %}
    }
}
"#;

//! Write a default configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    Ok(())
}

pub(crate) const DEFAULT_CONFIG: &str = r#"# razordoc configuration

[examples]
# Root of the example tree
dir = "src/MudBlazor.Docs"

# Example source extension
extension = "razor"

# Filenames containing this are examples
discriminator = "Example"

# Directory holding examples, and its replacement for generated markup.
# Generated files also get the replacement as a filename suffix.
examples_segment = "Examples"
code_segment = "Code"

[markup]
namespace = "MudBlazor.Docs.Examples.Markup"
wrapper_class = "mud-codeblock"

[tests]
# Test file to overwrite; its directory must exist
file = "src/MudBlazor.UnitTests/Components/_AllComponents.cs"
namespace = "MudBlazor.UnitTests.Components"
class_name = "_AllComponents"

# Uncomment to also generate the legacy snippets class
# [snippets]
# file = "src/MudBlazor.Docs/Models/Snippets.generated.cs"
# namespace = "MudBlazor.Docs.Models"
"#;

//! Generation command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use razordoc_emit::{
    Generator, GeneratorConfig, MarkupSettings, SnippetSettings, TestSuiteSettings,
};
use razordoc_source::ExampleRules;
use serde::Deserialize;

/// Configuration file structure (razordoc.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    examples: ExamplesConfig,
    #[serde(default)]
    markup: MarkupConfig,
    #[serde(default)]
    tests: TestsConfig,
    snippets: Option<SnippetsConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct ExamplesConfig {
    dir: Option<String>,
    extension: Option<String>,
    discriminator: Option<String>,
    examples_segment: Option<String>,
    code_segment: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct MarkupConfig {
    namespace: Option<String>,
    wrapper_class: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct TestsConfig {
    file: Option<String>,
    namespace: Option<String>,
    class_name: Option<String>,
    /// Namespaces imported by the test file
    usings: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct SnippetsConfig {
    file: Option<String>,
    namespace: Option<String>,
}

const DEFAULT_EXAMPLES_DIR: &str = "src/MudBlazor.Docs";

impl ConfigFile {
    fn into_generator_config(self) -> GeneratorConfig {
        let rules = ExampleRules::default();
        let markup = MarkupSettings::default();
        let tests = TestSuiteSettings::default();

        GeneratorConfig {
            docs_dir: PathBuf::from(
                self.examples
                    .dir
                    .unwrap_or_else(|| DEFAULT_EXAMPLES_DIR.to_string()),
            ),
            rules: ExampleRules {
                extension: self.examples.extension.unwrap_or(rules.extension),
                discriminator: self.examples.discriminator.unwrap_or(rules.discriminator),
                examples_segment: self
                    .examples
                    .examples_segment
                    .unwrap_or(rules.examples_segment),
                code_segment: self.examples.code_segment.unwrap_or(rules.code_segment),
            },
            markup: MarkupSettings {
                namespace: self.markup.namespace.unwrap_or(markup.namespace),
                wrapper_class: self.markup.wrapper_class.unwrap_or(markup.wrapper_class),
            },
            tests: TestSuiteSettings {
                file: self.tests.file.map(PathBuf::from).unwrap_or(tests.file),
                namespace: self.tests.namespace.unwrap_or(tests.namespace),
                class_name: self.tests.class_name.unwrap_or(tests.class_name),
                usings: self.tests.usings.unwrap_or(tests.usings),
            },
            snippets: self.snippets.map(|s| {
                let defaults = SnippetSettings::default();
                SnippetSettings {
                    file: s.file.map(PathBuf::from).unwrap_or(defaults.file),
                    namespace: s.namespace.unwrap_or(defaults.namespace),
                }
            }),
        }
    }
}

/// Load configuration if the file exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the build command.
pub fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?.into_generator_config();

    tracing::info!("Generating from {}", config.docs_dir.display());

    let result = Generator::new(config)
        .build()
        .context("Generation failed")?;

    tracing::info!(
        "Wrote {} markup files, {} tests and {} snippets in {}ms",
        result.markup_files,
        result.test_units,
        result.snippets,
        result.duration_ms
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::DEFAULT_CONFIG;
    use tempfile::tempdir;

    #[test]
    fn default_config_matches_built_in_defaults() {
        let config: ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();
        let config = config.into_generator_config();

        assert_eq!(config.docs_dir, PathBuf::from("src/MudBlazor.Docs"));
        assert_eq!(config.rules, ExampleRules::default());
        assert_eq!(config.markup, MarkupSettings::default());
        assert_eq!(config.tests, TestSuiteSettings::default());
        assert!(config.snippets.is_none());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("razordoc.toml"))
            .unwrap()
            .into_generator_config();

        assert_eq!(config.rules, ExampleRules::default());
        assert_eq!(config.tests, TestSuiteSettings::default());
    }

    #[test]
    fn overrides_selected_keys() {
        let config: ConfigFile = toml::from_str(
            r#"
[examples]
dir = "docs"
discriminator = "Demo"

[tests]
file = "tests/Generated.cs"
usings = ["Bunit"]

[snippets]
namespace = "Docs.Models"
"#,
        )
        .unwrap();
        let config = config.into_generator_config();

        assert_eq!(config.docs_dir, PathBuf::from("docs"));
        assert_eq!(config.rules.discriminator, "Demo");
        assert_eq!(config.rules.extension, "razor");
        assert_eq!(config.tests.file, PathBuf::from("tests/Generated.cs"));
        assert_eq!(config.tests.usings, vec!["Bunit".to_string()]);

        let snippets = config.snippets.unwrap();
        assert_eq!(snippets.namespace, "Docs.Models");
        assert_eq!(snippets.file, SnippetSettings::default().file);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("razordoc.toml");
        fs::write(&path, "[examples\ndir = ").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn runs_pipeline_from_config() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs/Examples");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("ButtonExample.razor"), "<MudButton>Ok</MudButton>").unwrap();

        let config_path = temp.path().join("razordoc.toml");
        fs::write(
            &config_path,
            format!(
                "[examples]\ndir = {:?}\n\n[tests]\nfile = {:?}\n",
                temp.path().join("docs").display().to_string(),
                temp.path().join("_AllComponents.cs").display().to_string(),
            ),
        )
        .unwrap();

        run(&config_path).unwrap();

        assert!(temp.path().join("docs/Code/ButtonExampleCode.razor").exists());
        let suite = fs::read_to_string(temp.path().join("_AllComponents.cs")).unwrap();
        assert!(suite.contains("ButtonExample_Test"));
    }
}

//! Generation pipeline.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use razordoc_highlight::{ClassHighlighter, Highlighter};
use razordoc_source::{component_name, ExampleRules, ExampleScanner, ScanError};

use crate::markup::{render_markup, MarkupSettings};
use crate::snippets::{render_snippets, SnippetSettings};
use crate::suite::{render_test_suite, TestSuiteSettings};
use crate::templates::TemplateEngine;

/// Configuration for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Root of the example tree
    pub docs_dir: PathBuf,

    /// Rules qualifying examples and naming generated markup
    pub rules: ExampleRules,

    /// Generated markup settings
    pub markup: MarkupSettings,

    /// Generated test suite settings
    pub tests: TestSuiteSettings,

    /// Legacy snippets class, written only when set
    pub snippets: Option<SnippetSettings>,
}

/// Result of a generation run.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of markup files written
    pub markup_files: usize,

    /// Number of test units in the test suite
    pub test_units: usize,

    /// Number of snippets written (0 when disabled)
    pub snippets: usize,

    /// Total run time in milliseconds
    pub duration_ms: u64,
}

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {path}: {message}")]
    WriteError { path: String, message: String },
}

/// Runs the whole pipeline: markup files, test suite and snippets.
///
/// Every run regenerates all artifacts from scratch and overwrites them.
pub struct Generator {
    config: GeneratorConfig,
    highlighter: Box<dyn Highlighter>,
    templates: TemplateEngine,
}

impl Generator {
    /// Create a generator using the built-in highlighter.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_highlighter(config, Box::new(ClassHighlighter::new()))
    }

    /// Create a generator using a custom highlighter.
    pub fn with_highlighter(config: GeneratorConfig, highlighter: Box<dyn Highlighter>) -> Self {
        Self {
            config,
            highlighter,
            templates: TemplateEngine::new(),
        }
    }

    /// Run the pipeline.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        self.check_paths()?;

        let markup_files = self.generate_markup()?;
        let test_units = self.generate_tests()?;
        let snippets = match &self.config.snippets {
            Some(settings) => self.generate_snippets(settings)?,
            None => 0,
        };

        Ok(BuildResult {
            markup_files,
            test_units,
            snippets,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Fail before writing anything if an input or output location is missing.
    fn check_paths(&self) -> Result<(), BuildError> {
        if !self.config.docs_dir.is_dir() {
            return Err(BuildError::DirectoryNotFound(
                self.config.docs_dir.display().to_string(),
            ));
        }

        require_parent_dir(&self.config.tests.file)?;

        if let Some(snippets) = &self.config.snippets {
            require_parent_dir(&snippets.file)?;
        }

        Ok(())
    }

    fn scanner(&self) -> ExampleScanner {
        ExampleScanner::new(&self.config.docs_dir, self.config.rules.clone())
    }

    /// Write one highlighted markup file per example.
    fn generate_markup(&self) -> Result<usize, BuildError> {
        let examples = self.scanner().scan()?;

        for example in &examples {
            let target = self
                .config
                .rules
                .markup_path(&self.config.docs_dir, &example.path);

            let content = render_markup(
                example,
                self.highlighter.as_ref(),
                &self.templates,
                &self.config.markup,
            )
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
            }
            fs::write(&target, content).map_err(|e| write_error(&target, e))?;

            tracing::debug!("Generated {}", target.display());
        }

        Ok(examples.len())
    }

    /// Write the test suite with one test per example.
    fn generate_tests(&self) -> Result<usize, BuildError> {
        let components: Vec<String> = self
            .scanner()
            .example_paths()?
            .iter()
            .map(|path| component_name(path))
            .collect();

        for component in &components {
            tracing::debug!("Added test for {}", component);
        }

        let content = render_test_suite(&components, &self.templates, &self.config.tests)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let file = &self.config.tests.file;
        fs::write(file, content).map_err(|e| write_error(file, e))?;

        Ok(components.len())
    }

    /// Write the legacy snippets class.
    fn generate_snippets(&self, settings: &SnippetSettings) -> Result<usize, BuildError> {
        let examples = self.scanner().scan()?;

        let content = render_snippets(&examples, &self.templates, settings)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        fs::write(&settings.file, content).map_err(|e| write_error(&settings.file, e))?;

        Ok(examples.len())
    }
}

fn require_parent_dir(file: &Path) -> Result<(), BuildError> {
    let parent = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if parent.is_dir() {
        Ok(())
    } else {
        Err(BuildError::DirectoryNotFound(parent.display().to_string()))
    }
}

fn write_error(path: &Path, e: std::io::Error) -> BuildError {
    BuildError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

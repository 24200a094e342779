//! Generated artifacts for documentation examples.
//!
//! Writes a highlighted markup file next to every example, one render test per
//! example into a shared test suite, and optionally the legacy snippets class.

pub mod builder;
pub mod markup;
pub mod snippets;
pub mod suite;
pub mod templates;

pub use builder::{BuildError, BuildResult, Generator, GeneratorConfig};
pub use markup::{render_markup, MarkupSettings};
pub use snippets::{render_snippets, snippet_source, SnippetSettings};
pub use suite::{render_test_suite, TestSuiteSettings};
pub use templates::TemplateEngine;

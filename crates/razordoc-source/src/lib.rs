//! Example source discovery and preparation.
//!
//! This crate finds example components in a documentation tree, removes
//! framework directives from their source, and splits each example into its
//! markup section and optional code-behind section.

pub mod blocks;
pub mod example;
pub mod scan;
pub mod strip;

pub use blocks::{SourceBlocks, CODE_MARKER};
pub use example::{component_name, ExampleRules, ExampleSource};
pub use scan::{ExampleScanner, ScanError};
pub use strip::strip_directives;

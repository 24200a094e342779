//! Syntax highlighting for documentation examples.
//!
//! Wraps a [`Highlighter`] service with the pieces the docs need around it:
//! guarding the reserved `@` character and re-classifying highlighted
//! attribute values into keyword and enum spans.

pub mod attributes;
pub mod class;
pub mod csharp;
pub mod escape;
pub mod markup;
pub mod traits;

pub use attributes::{classify_value, postprocess_attributes, ValueClass};
pub use class::{escape_html, ClassHighlighter};
pub use escape::EscapeGuard;
pub use traits::{HighlightedFragment, Highlighter, Language};

//! Directive stripping for example sources.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a whole `@using ...` or `@namespace ...` line, including its line break.
static DIRECTIVE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*@(?:using|namespace)[ \t]+[^\r\n]*(?:\r?\n|\z)")
        .expect("Invalid directive regex")
});

/// Remove import and namespace directive lines from example source.
///
/// Lines may appear anywhere in the file. Everything else is kept verbatim;
/// the result is trimmed of leading and trailing whitespace.
pub fn strip_directives(source: &str) -> String {
    DIRECTIVE_LINE.replace_all(source, "").trim().to_string()
}

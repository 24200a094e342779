//! C# tokenizer for code-behind sections.

use regex::Regex;
use std::sync::LazyLock;

use crate::class::{escape_html, span};

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)(?P<comment>//[^\n]*|/\*.*?\*/)|(?P<string>@"(?:[^"]|"")*"|\$?"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)')|(?P<word>[A-Za-z_][A-Za-z0-9_]*)|(?P<number>\b[0-9]+(?:\.[0-9]+)?[fFdDmMlLuU]?\b)"#,
    )
    .expect("Invalid C# token regex")
});

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "base", "bool", "break", "byte", "case", "catch",
    "char", "class", "const", "continue", "decimal", "default", "delegate", "do", "double",
    "else", "enum", "event", "false", "finally", "float", "for", "foreach", "get", "if", "in",
    "init", "int", "interface", "internal", "is", "long", "namespace", "new", "null", "object",
    "out", "override", "params", "private", "protected", "public", "readonly", "record", "ref",
    "return", "sealed", "set", "short", "static", "string", "struct", "switch", "this",
    "throw", "true", "try", "typeof", "uint", "ulong", "using", "var", "virtual", "void",
    "while", "yield",
];

/// Highlight C# source into class spans (without the outer wrapper).
pub fn highlight_csharp(source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    let mut last = 0;

    for caps in TOKEN.captures_iter(source) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        out.push_str(&escape_html(&source[last..whole.start()]));

        if let Some(m) = caps.name("comment") {
            out.push_str(&span("comment", m.as_str()));
        } else if let Some(m) = caps.name("string") {
            out.push_str(&span("string", m.as_str()));
        } else if let Some(m) = caps.name("word") {
            if KEYWORDS.contains(&m.as_str()) {
                out.push_str(&span("keyword", m.as_str()));
            } else {
                out.push_str(&escape_html(m.as_str()));
            }
        } else if let Some(m) = caps.name("number") {
            out.push_str(&span("number", m.as_str()));
        }

        last = whole.end();
    }

    out.push_str(&escape_html(&source[last..]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn highlights_keywords_and_numbers() {
        assert_eq!(
            highlight_csharp("private int count = 42;"),
            concat!(
                r#"<span class="keyword">private</span> "#,
                r#"<span class="keyword">int</span> count = "#,
                r#"<span class="number">42</span>;"#,
            )
        );
    }

    #[test]
    fn highlights_strings_and_comments() {
        let html = highlight_csharp("// greet\nvar s = \"if <b>\";");

        assert!(html.starts_with(r#"<span class="comment">// greet</span>"#));
        assert!(html.contains(r#"<span class="string">&quot;if &lt;b&gt;&quot;</span>"#));
        assert!(!html.contains(r#"<span class="keyword">if</span>"#));
    }

    #[test]
    fn identifiers_are_plain() {
        assert_eq!(highlight_csharp("Counter1"), "Counter1");
    }

    #[test]
    fn marker_prefix_stays_plain_text() {
        let html = highlight_csharp("@code {\n    bool open;\n}");

        assert!(html.starts_with("@code {"));
        assert!(html.contains(r#"<span class="keyword">bool</span> open;"#));
    }
}

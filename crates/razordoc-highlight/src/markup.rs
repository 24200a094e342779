//! Markup tokenizer for component examples.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::class::{escape_html, span};

/// Matches comments and whole tags. Quoted attribute values may contain `<`,
/// `>` and `/` without ending the tag.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)(?P<comment><!--.*?-->)|<(?P<close>/?)(?P<name>[A-Za-z][A-Za-z0-9_:.\-]*)(?P<attrs>(?:[^<>"']|"[^"]*"|'[^']*')*?)(?P<end>/?)>"#,
    )
    .expect("Invalid markup token regex")
});

/// Matches one attribute inside a tag: a name with an optional value.
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<name>[^\s=/>"']+)(?:(?P<eq>\s*=\s*)(?P<value>"[^"]*"|'[^']*'|[^\s"'=<>`]+))?"#)
        .expect("Invalid attribute regex")
});

/// Highlight markup source into class spans (without the outer wrapper).
pub fn highlight_markup(source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    let mut last = 0;

    for caps in TOKEN.captures_iter(source) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        out.push_str(&escape_html(&source[last..whole.start()]));

        if let Some(comment) = caps.name("comment") {
            out.push_str(&span("htmlComment", comment.as_str()));
        } else {
            push_tag(&mut out, &caps);
        }

        last = whole.end();
    }

    out.push_str(&escape_html(&source[last..]));
    out
}

fn push_tag(out: &mut String, caps: &Captures<'_>) {
    out.push_str(&span("htmlTagDelimiter", &format!("<{}", group(caps, "close"))));
    out.push_str(&span("htmlElementName", group(caps, "name")));
    push_attributes(out, group(caps, "attrs"));
    out.push_str(&span("htmlTagDelimiter", &format!("{}>", group(caps, "end"))));
}

fn group<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn push_attributes(out: &mut String, attrs: &str) {
    let mut last = 0;

    for caps in ATTRIBUTE.captures_iter(attrs) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        out.push_str(&escape_html(&attrs[last..whole.start()]));

        if let Some(name) = caps.name("name") {
            out.push_str(&span("htmlAttributeName", name.as_str()));
        }

        if let (Some(eq), Some(value)) = (caps.name("eq"), caps.name("value")) {
            let (before, after) = eq.as_str().split_once('=').unwrap_or(("", ""));
            out.push_str(&escape_html(before));
            out.push_str(&span("htmlOperator", "="));
            out.push_str(&escape_html(after));
            out.push_str(&span("htmlAttributeValue", value.as_str()));
        }

        last = whole.end();
    }

    out.push_str(&escape_html(&attrs[last..]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn highlights_element_with_attributes() {
        let html = highlight_markup(r#"<MudButton Disabled="true">Ok</MudButton>"#);

        assert_eq!(
            html,
            concat!(
                r#"<span class="htmlTagDelimiter">&lt;</span>"#,
                r#"<span class="htmlElementName">MudButton</span> "#,
                r#"<span class="htmlAttributeName">Disabled</span>"#,
                r#"<span class="htmlOperator">=</span>"#,
                r#"<span class="htmlAttributeValue">&quot;true&quot;</span>"#,
                r#"<span class="htmlTagDelimiter">&gt;</span>"#,
                "Ok",
                r#"<span class="htmlTagDelimiter">&lt;/</span>"#,
                r#"<span class="htmlElementName">MudButton</span>"#,
                r#"<span class="htmlTagDelimiter">&gt;</span>"#,
            )
        );
    }

    #[test]
    fn handles_self_closing_and_bare_attributes() {
        let html = highlight_markup("<MudDivider Vertical />");

        assert!(html.contains(r#"<span class="htmlAttributeName">Vertical</span>"#));
        assert!(html.ends_with(r#"<span class="htmlTagDelimiter">/&gt;</span>"#));
    }

    #[test]
    fn quoted_values_may_contain_angle_brackets() {
        let html = highlight_markup(r#"<MudButton OnClick="() => x > 1">Go</MudButton>"#);

        assert!(html.contains(
            r#"<span class="htmlAttributeValue">&quot;() =&gt; x &gt; 1&quot;</span>"#
        ));
    }

    #[test]
    fn highlights_empty_values() {
        let html = highlight_markup(r#"<MudTextField Label="" />"#);

        assert!(html.contains(r#"<span class="htmlAttributeValue">&quot;&quot;</span>"#));
    }

    #[test]
    fn highlights_comments() {
        let html = highlight_markup("<!-- note -->\n<p>a &amp; b</p>");

        assert!(html.starts_with(r#"<span class="htmlComment">&lt;!-- note --&gt;</span>"#));
        assert!(html.contains("a &amp;amp; b"));
    }

    #[test]
    fn stray_angle_bracket_is_text() {
        assert_eq!(highlight_markup("1 < 2"), "1 &lt; 2");
    }
}

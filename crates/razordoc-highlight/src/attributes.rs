//! Semantic post-processing of highlighted attribute values.
//!
//! The highlighter marks every quoted attribute value with the same
//! `htmlAttributeValue` class. This pass looks at the literal text of each
//! value and re-tags booleans as keywords and `Type.Member` values as enums.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A highlighted double-quoted attribute value. Empty values match too.
static VALUE_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<span class="htmlAttributeValue">&quot;(?P<value>.*?)&quot;</span>"#)
        .expect("Invalid attribute value regex")
});

/// `Type.Member` where both identifiers start uppercase and are at least two
/// characters long.
static ENUM_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[A-Z][A-Za-z0-9]+)\.(?P<member>[A-Z][A-Za-z0-9]+)$")
        .expect("Invalid enum value regex")
});

/// Classification of one attribute value literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass<'a> {
    /// Keep the original value span
    Passthrough,
    /// `true` or `false`
    Keyword(&'a str),
    /// `Type.Member`
    EnumSplit { type_name: &'a str, member: &'a str },
}

/// Classify an attribute value literal (the text between the quotes).
///
/// Rules are checked in order: blank, boolean, enum, anything else.
pub fn classify_value(value: &str) -> ValueClass<'_> {
    if value.trim().is_empty() {
        return ValueClass::Passthrough;
    }

    if value == "true" || value == "false" {
        return ValueClass::Keyword(value);
    }

    if let Some(caps) = ENUM_VALUE.captures(value) {
        if let (Some(type_name), Some(member)) = (caps.name("type"), caps.name("member")) {
            return ValueClass::EnumSplit {
                type_name: type_name.as_str(),
                member: member.as_str(),
            };
        }
    }

    ValueClass::Passthrough
}

/// Re-classify every highlighted attribute value in `html`.
///
/// Only the value spans are rewritten; all other markup is left as is.
pub fn postprocess_attributes(html: &str) -> String {
    VALUE_SPAN
        .replace_all(html, |caps: &Captures<'_>| {
            let value = caps.name("value").map_or("", |m| m.as_str());
            match classify_value(value) {
                ValueClass::Passthrough => caps[0].to_string(),
                ValueClass::Keyword(keyword) => {
                    quoted(&format!("<span class=\"keyword\">{}</span>", keyword))
                }
                ValueClass::EnumSplit { type_name, member } => quoted(&format!(
                    "<span class=\"enum\">{}</span><span class=\"enumValue\">.{}</span>",
                    type_name, member
                )),
            }
        })
        .into_owned()
}

fn quoted(inner: &str) -> String {
    format!(
        "<span class=\"quot\">&quot;</span>{}<span class=\"quot\">&quot;</span>",
        inner
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn value_span(value: &str) -> String {
        format!("<span class=\"htmlAttributeValue\">&quot;{}&quot;</span>", value)
    }

    #[test]
    fn classifies_values() {
        assert_eq!(classify_value("true"), ValueClass::Keyword("true"));
        assert_eq!(classify_value("false"), ValueClass::Keyword("false"));
        assert_eq!(
            classify_value("Color.Primary"),
            ValueClass::EnumSplit {
                type_name: "Color",
                member: "Primary"
            }
        );
        assert_eq!(classify_value(""), ValueClass::Passthrough);
        assert_eq!(classify_value("   "), ValueClass::Passthrough);
        assert_eq!(classify_value("True"), ValueClass::Passthrough);
        assert_eq!(classify_value("color.primary"), ValueClass::Passthrough);
        assert_eq!(classify_value("Color.P"), ValueClass::Passthrough);
        assert_eq!(classify_value("C.Primary"), ValueClass::Passthrough);
        assert_eq!(classify_value("Color.Primary.Dark"), ValueClass::Passthrough);
        assert_eq!(classify_value(" Color.Primary"), ValueClass::Passthrough);
        assert_eq!(classify_value("Hello world"), ValueClass::Passthrough);
    }

    #[test]
    fn rewrites_booleans_as_keywords() {
        let html = postprocess_attributes(&value_span("true"));

        assert_eq!(
            html,
            "<span class=\"quot\">&quot;</span><span class=\"keyword\">true</span><span class=\"quot\">&quot;</span>"
        );
        assert!(!html.contains("htmlAttributeValue"));
    }

    #[test]
    fn splits_enum_values() {
        let html = postprocess_attributes(&value_span("Color.Primary"));

        assert_eq!(
            html,
            "<span class=\"quot\">&quot;</span><span class=\"enum\">Color</span><span class=\"enumValue\">.Primary</span><span class=\"quot\">&quot;</span>"
        );
    }

    #[test]
    fn leaves_other_values_unchanged() {
        for value in ["", "  ", "color.primary", "Color.P", "Click me", "&#64;text"] {
            let span = value_span(value);
            assert_eq!(postprocess_attributes(&span), span);
        }
    }

    #[test]
    fn handles_each_span_independently() {
        let html = format!(
            "<span class=\"htmlElementName\">MudButton</span> {} {} {}",
            value_span("false"),
            value_span(""),
            value_span("Variant.Filled")
        );

        let processed = postprocess_attributes(&html);

        assert!(processed.starts_with("<span class=\"htmlElementName\">MudButton</span> "));
        assert!(processed.contains("<span class=\"keyword\">false</span>"));
        assert!(processed.contains(&value_span("")));
        assert!(processed.contains("<span class=\"enum\">Variant</span><span class=\"enumValue\">.Filled</span>"));
        assert_eq!(processed.matches("htmlAttributeValue").count(), 1);
    }

    #[test]
    fn html_without_values_is_untouched() {
        let html = "<span class=\"htmlElementName\">p</span>true";

        assert_eq!(postprocess_attributes(html), html);
    }
}

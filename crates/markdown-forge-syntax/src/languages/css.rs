//! CSS and its preprocessor dialects.
//!
//! A line containing `{` is split at the brace: the part before it is a
//! selector, the rest is declarations. Lines without a brace are
//! declarations, unless they are at-rules.

use std::sync::OnceLock;

use regex::Regex;

use crate::comments::C_STYLE;
use crate::line::{CodeLine, Segment};
use crate::profile::{LanguageProfile, LexicalRules};
use crate::span_class::SpanClass;
use crate::tokenizer::LanguageTokenizer;

const VALUE_KEYWORDS: &[&str] = &[
    "absolute", "auto", "block", "bold", "center", "contain", "cover", "dashed", "dotted",
    "fixed", "flex", "grid", "hidden", "important", "inherit", "initial", "inline", "italic",
    "none", "normal", "pointer", "relative", "scroll", "solid",
    "sticky", "transparent", "unset", "visible",
];

fn variable_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$[\w-]+").expect("Invalid variable regex"))
}

fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#[0-9a-fA-F]{3,8}\b").expect("Invalid hex color regex"))
}

fn property_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(^\s*|[;{(]\s*)([A-Za-z-][\w-]*)(\s*:)").expect("Invalid property regex")
    })
}

fn unit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\d*\.?\d+(?:(?:vmin|vmax|rem|em|px|vh|vw|deg|ms|fr|ch|pt|s)\b|%)")
            .expect("Invalid unit regex")
    })
}

fn selector_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"::?[A-Za-z-][\w-]*|[.#]?[A-Za-z_][\w-]*").expect("Invalid selector regex")
    })
}

fn selectors(text: &str) -> Vec<Segment> {
    CodeLine::new(text)
        .wrap_matches(selector_regex(), SpanClass::Decorator)
        .into_segments()
}

fn declarations(text: &str) -> Vec<Segment> {
    CodeLine::new(text)
        .wrap_matches(variable_regex(), SpanClass::Special)
        .wrap_matches(hex_color_regex(), SpanClass::Special)
        .wrap_groups(property_regex(), &[(2, SpanClass::Keyword)])
        .wrap_matches(unit_regex(), SpanClass::Number)
        .into_segments()
}

pub struct Css {
    profile: LanguageProfile,
}

impl Css {
    pub fn new() -> Self {
        let lexical = LexicalRules {
            quotes: &['"', '\''],
            block_comment: Some(C_STYLE),
            ..Default::default()
        };
        Self {
            profile: LanguageProfile::new(lexical, &[])
                .with_words(SpanClass::Special, VALUE_KEYWORDS)
                .with_decorators(),
        }
    }
}

impl Default for Css {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTokenizer for Css {
    fn key(&self) -> &'static str {
        "css"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["css", "scss", "sass", "less"]
    }

    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn structure(&self, line: CodeLine) -> CodeLine {
        let text = line.text();
        let mut in_selector = text.contains('{') && !text.trim_start().starts_with('@');
        line.map_plain(|plain| {
            if !in_selector {
                return declarations(plain);
            }
            match plain.find('{') {
                Some(brace) => {
                    in_selector = false;
                    let mut pieces = selectors(&plain[..brace]);
                    pieces.extend(declarations(&plain[brace..]));
                    pieces
                }
                None => selectors(plain),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn rule_on_one_line() {
        assert_snapshot!(
            Css::new().highlight("a:hover, .btn > #main { color: #fff; margin: 0 1.5rem !important; }"),
            @r#"<span class="md-decorator">a</span><span class="md-decorator">:hover</span>, <span class="md-decorator">.btn</span> &gt; <span class="md-decorator">#main</span> { <span class="md-keyword">color</span>: <span class="md-special">#fff</span>; <span class="md-keyword">margin</span>: <span class="md-number">0</span> <span class="md-number">1.5rem</span> !<span class="md-special">important</span>; }"#
        );
    }

    #[test]
    fn sass_variable() {
        assert_snapshot!(
            Css::new().highlight("$primary: #333;"),
            @r#"<span class="md-special">$primary</span>: <span class="md-special">#333</span>;"#
        );
    }

    #[test]
    fn at_rule() {
        assert_snapshot!(
            Css::new().highlight("@media (max-width: 600px) {"),
            @r#"<span class="md-decorator">@media</span> (<span class="md-keyword">max-width</span>: <span class="md-number">600px</span>) {"#
        );
    }

    #[test]
    fn declaration_with_string() {
        assert_snapshot!(
            Css::new().highlight(r#"font-family: "Fira Code", monospace;"#),
            @r#"<span class="md-keyword">font-family</span>: <span class="md-string">"Fira Code"</span>, monospace;"#
        );
    }
}

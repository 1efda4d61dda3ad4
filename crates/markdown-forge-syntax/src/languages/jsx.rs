use std::sync::OnceLock;

use regex::Regex;

use super::javascript;
use crate::line::{CodeLine, Segment, split_by_groups};
use crate::profile::LanguageProfile;
use crate::span_class::SpanClass;
use crate::tokenizer::LanguageTokenizer;

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(</?)([A-Za-z][\w.]*)").expect("Invalid JSX tag regex"))
}

/// `name=` followed by an expression or a string literal.
fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([A-Za-z_][\w-]*)(=)(\{|$)").expect("Invalid JSX attribute regex")
    })
}

/// Components are capitalized, intrinsic elements are not.
fn tag_class(name: &str) -> SpanClass {
    if name.starts_with(|c: char| c.is_ascii_uppercase()) {
        SpanClass::Decorator
    } else {
        SpanClass::Keyword
    }
}

fn tags(line: CodeLine) -> CodeLine {
    line.map_plain(|text| {
        let mut pieces = Vec::new();
        let mut last = 0;
        for caps in tag_regex().captures_iter(text) {
            let Some(name) = caps.get(2) else { continue };
            pieces.push(Segment::plain(&text[last..name.start()]));
            pieces.push(Segment::span(tag_class(name.as_str()), name.as_str()));
            last = name.end();
        }
        pieces.push(Segment::plain(&text[last..]));
        pieces
    })
}

pub struct Jsx {
    profile: LanguageProfile,
}

impl Jsx {
    pub fn new() -> Self {
        Self {
            profile: javascript::base_profile(javascript::KEYWORDS),
        }
    }
}

impl Default for Jsx {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTokenizer for Jsx {
    fn key(&self) -> &'static str {
        "jsx"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["jsx", "tsx", "react"]
    }

    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn structure(&self, line: CodeLine) -> CodeLine {
        if !line.text().contains('<') {
            return line;
        }
        tags(line).map_plain(|text| {
            split_by_groups(text, attribute_regex(), &[(1, SpanClass::Special)], |_| true)
        })
    }
}

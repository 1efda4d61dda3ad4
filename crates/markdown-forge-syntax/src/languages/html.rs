use std::sync::OnceLock;

use regex::Regex;

use crate::comments::CommentDelimiter;
use crate::line::{CodeLine, Segment};
use crate::profile::{LanguageProfile, LexicalRules};
use crate::span_class::SpanClass;
use crate::tokenizer::LanguageTokenizer;

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(</?)([A-Za-z][\w:-]*)([^<>]*)(/?>)?").expect("Invalid HTML tag regex")
    })
}

fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([A-Za-z_:@][\w:.-]*)(?:(\s*=\s*)("[^"]*"|'[^']*'|[^\s"'>]+))?"#)
            .expect("Invalid HTML attribute regex")
    })
}

/// Attribute names are special, quoted or bare values are strings.
fn attributes(text: &str, pieces: &mut Vec<Segment>) {
    let mut last = 0;
    for caps in attribute_regex().captures_iter(text) {
        let Some(name) = caps.get(1) else { continue };
        pieces.push(Segment::plain(&text[last..name.start()]));
        pieces.push(Segment::span(SpanClass::Special, name.as_str()));
        last = name.end();
        if let Some(value) = caps.get(3) {
            pieces.push(Segment::plain(&text[last..value.start()]));
            pieces.push(Segment::span(SpanClass::String, value.as_str()));
            last = value.end();
        }
    }
    pieces.push(Segment::plain(&text[last..]));
}

fn tags(text: &str) -> Vec<Segment> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for caps in tag_regex().captures_iter(text) {
        let (Some(name), Some(attrs)) = (caps.get(2), caps.get(3)) else {
            continue;
        };
        pieces.push(Segment::plain(&text[last..name.start()]));
        pieces.push(Segment::span(SpanClass::Keyword, name.as_str()));
        attributes(attrs.as_str(), &mut pieces);
        last = attrs.end();
    }
    pieces.push(Segment::plain(&text[last..]));
    pieces
}

pub struct Html {
    profile: LanguageProfile,
}

impl Html {
    pub fn new() -> Self {
        let lexical = LexicalRules {
            block_comment: Some(CommentDelimiter::Paired {
                start: "<!--",
                end: "-->",
            }),
            ..Default::default()
        };
        Self {
            profile: LanguageProfile::new(lexical, &[]).without_numbers(),
        }
    }
}

impl Default for Html {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTokenizer for Html {
    fn key(&self) -> &'static str {
        "html"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["html", "htm", "xml", "svg"]
    }

    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn structure(&self, line: CodeLine) -> CodeLine {
        line.map_plain(tags)
    }
}

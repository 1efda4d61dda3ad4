use std::sync::OnceLock;

use regex::Regex;

use super::javascript;
use crate::line::CodeLine;
use crate::profile::LanguageProfile;
use crate::span_class::SpanClass;
use crate::tokenizer::LanguageTokenizer;

const TS_KEYWORDS: &[&str] = &[
    "abstract", "as", "declare", "is", "keyof", "namespace", "never", "readonly", "satisfies",
    "type", "unknown", "infer",
];

const TYPES: &[&str] = &[
    "any", "bigint", "boolean", "number", "object", "string", "symbol", "Partial", "Readonly",
    "ReadonlyArray", "Record", "Pick", "Omit", "Exclude", "Extract", "ReturnType", "Required",
];

/// `: Foo` in a type annotation.
fn annotation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(:\s*)([A-Z][\w]*)").expect("Invalid type annotation regex"))
}

pub struct TypeScript {
    profile: LanguageProfile,
}

impl TypeScript {
    pub fn new() -> Self {
        let keywords: Vec<&str> = javascript::KEYWORDS
            .iter()
            .chain(TS_KEYWORDS)
            .copied()
            .collect();
        Self {
            profile: javascript::base_profile(&keywords).with_words(SpanClass::Class, TYPES),
        }
    }
}

impl Default for TypeScript {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTokenizer for TypeScript {
    fn key(&self) -> &'static str {
        "typescript"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["ts", "typescript", "mts", "cts"]
    }

    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn structure(&self, line: CodeLine) -> CodeLine {
        line.wrap_groups(annotation_regex(), &[(2, SpanClass::Class)])
    }
}

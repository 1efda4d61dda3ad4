use std::sync::OnceLock;

use regex::Regex;

use crate::comments::C_STYLE;
use crate::line::CodeLine;
use crate::profile::{CallSites, LanguageProfile, LexicalRules};
use crate::span_class::SpanClass;
use crate::tokenizer::LanguageTokenizer;

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "super", "trait", "type", "unsafe", "use",
    "where", "while",
];

const SPECIAL: &[&str] = &["self", "Self", "true", "false", "None", "Some", "Ok", "Err"];

const TYPES: &[&str] = &[
    "bool", "char", "str", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32",
    "i64", "i128", "isize", "f32", "f64", "String", "Vec", "Option", "Result", "Box", "Rc",
    "Arc", "HashMap", "HashSet", "BTreeMap",
];

fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#!?\[[^\]]*\]").expect("Invalid attribute regex"))
}

fn macro_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([A-Za-z_]\w*!)(\s*[(\[{])").expect("Invalid macro regex"))
}

fn lifetime_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"'[A-Za-z_]\w*").expect("Invalid lifetime regex"))
}

pub struct Rust {
    profile: LanguageProfile,
}

impl Rust {
    pub fn new() -> Self {
        let lexical = LexicalRules {
            quotes: &['"', '\''],
            char_literals: true,
            line_comment: Some("//"),
            block_comment: Some(C_STYLE),
            ..Default::default()
        };
        Self {
            profile: LanguageProfile::new(lexical, KEYWORDS)
                .with_words(SpanClass::Special, SPECIAL)
                .with_words(SpanClass::Class, TYPES)
                .with_calls(CallSites::Methods),
        }
    }
}

impl Default for Rust {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTokenizer for Rust {
    fn key(&self) -> &'static str {
        "rust"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["rs", "rust"]
    }

    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn structure(&self, line: CodeLine) -> CodeLine {
        line.wrap_matches(attribute_regex(), SpanClass::Decorator)
            .wrap_groups(macro_regex(), &[(1, SpanClass::CallMethod)])
            .wrap_matches(lifetime_regex(), SpanClass::Special)
    }
}

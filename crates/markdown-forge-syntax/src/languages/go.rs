use crate::comments::C_STYLE;
use crate::profile::{CallSites, LanguageProfile, LexicalRules};
use crate::span_class::SpanClass;
use crate::tokenizer::LanguageTokenizer;

const KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

const SPECIAL: &[&str] = &["nil", "true", "false", "iota", "err"];

const TYPES: &[&str] = &[
    "bool", "byte", "complex64", "complex128", "error", "float32", "float64", "int", "int8",
    "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16", "uint32", "uint64",
    "uintptr", "any",
];

const BUILTINS: &[&str] = &[
    "append", "cap", "close", "copy", "delete", "len", "make", "new", "panic", "print",
    "println", "recover",
];

pub struct Go {
    profile: LanguageProfile,
}

impl Go {
    pub fn new() -> Self {
        let lexical = LexicalRules {
            quotes: &['"', '\'', '`'],
            char_literals: true,
            line_comment: Some("//"),
            block_comment: Some(C_STYLE),
            ..Default::default()
        };
        Self {
            profile: LanguageProfile::new(lexical, KEYWORDS)
                .with_words(SpanClass::Special, SPECIAL)
                .with_words(SpanClass::Class, TYPES)
                .with_words(SpanClass::CallMethod, BUILTINS)
                .with_calls(CallSites::Qualified),
        }
    }
}

impl Default for Go {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTokenizer for Go {
    fn key(&self) -> &'static str {
        "go"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["go", "golang"]
    }

    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }
}

use std::sync::OnceLock;

use regex::Regex;

use crate::comments::CommentDelimiter;
use crate::line::CodeLine;
use crate::profile::{CallSites, LanguageProfile, LexicalRules};
use crate::span_class::SpanClass;
use crate::tokenizer::LanguageTokenizer;

const KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if",
    "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

const BUILTINS: &[&str] = &[
    "assert", "collectgarbage", "dofile", "error", "getmetatable", "ipairs", "load",
    "loadfile", "next", "pairs", "pcall", "print", "rawequal", "rawget", "rawset", "require",
    "select", "setmetatable", "tonumber", "tostring", "type", "xpcall", "coroutine", "io",
    "math", "os", "string", "table", "utf8",
];

fn concat_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.{2,3}").expect("Invalid concat regex"))
}

pub struct Lua {
    profile: LanguageProfile,
}

impl Lua {
    pub fn new() -> Self {
        let lexical = LexicalRules {
            quotes: &['"', '\''],
            line_comment: Some("--"),
            block_comment: Some(CommentDelimiter::Paired {
                start: "--[[",
                end: "]]",
            }),
            ..Default::default()
        };
        Self {
            profile: LanguageProfile::new(lexical, KEYWORDS)
                .with_words(SpanClass::Decorator, BUILTINS)
                .with_calls(CallSites::Any)
                .with_punctuation(),
        }
    }
}

impl Default for Lua {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTokenizer for Lua {
    fn key(&self) -> &'static str {
        "lua"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["lua"]
    }

    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn structure(&self, line: CodeLine) -> CodeLine {
        line.wrap_matches(concat_regex(), SpanClass::Decorator)
    }
}

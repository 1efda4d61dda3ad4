use std::sync::OnceLock;

use regex::Regex;

use crate::line::CodeLine;
use crate::profile::{LanguageProfile, LexicalRules};
use crate::span_class::SpanClass;
use crate::tokenizer::LanguageTokenizer;

const KEYWORDS: &[&str] = &[
    "case", "do", "done", "elif", "else", "esac", "exit", "export", "fi", "for", "function",
    "if", "in", "local", "readonly", "return", "select", "then", "until", "while",
];

const BUILTINS: &[&str] = &[
    "alias", "awk", "cat", "cd", "chmod", "cp", "curl", "echo", "eval", "exec", "git", "grep",
    "ls", "mkdir", "mv", "printf", "read", "rm", "sed", "set", "shift", "source", "sudo",
    "test", "trap", "unset",
];

/// `$NAME`, `${...}`, `$1`, `$@` and friends.
fn variable_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\$(?:\{[^}]*\}|[A-Za-z_]\w*|[0-9@#?*!$-])").expect("Invalid variable regex")
    })
}

pub struct Shell {
    profile: LanguageProfile,
}

impl Shell {
    pub fn new() -> Self {
        let lexical = LexicalRules {
            quotes: &['"', '\''],
            line_comment: Some("#"),
            comment_after_space: true,
            ..Default::default()
        };
        Self {
            profile: LanguageProfile::new(lexical, KEYWORDS).with_words(SpanClass::Class, BUILTINS),
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTokenizer for Shell {
    fn key(&self) -> &'static str {
        "shell"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["sh", "bash", "zsh", "shell", "shellscript"]
    }

    fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    fn structure(&self, line: CodeLine) -> CodeLine {
        line.wrap_matches(variable_regex(), SpanClass::Special)
    }
}

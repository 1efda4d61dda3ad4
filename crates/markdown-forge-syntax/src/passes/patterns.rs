//! Regex-driven passes: decorators, call sites and punctuation.

use std::sync::OnceLock;

use regex::Regex;

use crate::line::{CodeLine, split_by_groups};
use crate::profile::{CallSites, LanguageProfile};
use crate::span_class::SpanClass;

fn decorator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(^|[\s(])(@[A-Za-z_][\w.]*)").expect("Invalid decorator regex")
    })
}

fn method_call_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\.)([A-Za-z_$][\w$]*)(\s*\()").expect("Invalid method call regex")
    })
}

fn qualified_call_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b([A-Za-z_]\w*)(\.)([A-Za-z_]\w*)(\s*\()")
            .expect("Invalid qualified call regex")
    })
}

fn any_call_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([A-Za-z_]\w*)(\s*\()").expect("Invalid call regex"))
}

fn punctuation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[(){}\[\];,]").expect("Invalid punctuation regex"))
}

/// `@name` and `@scope.name`.
pub fn decorators(line: CodeLine) -> CodeLine {
    line.wrap_groups(decorator_regex(), &[(2, SpanClass::Decorator)])
}

pub fn calls(line: CodeLine, profile: &LanguageProfile) -> CodeLine {
    match profile.calls {
        CallSites::None => line,
        CallSites::Methods => line.wrap_groups(method_call_regex(), &[(2, SpanClass::CallMethod)]),
        CallSites::Qualified => line.wrap_groups(
            qualified_call_regex(),
            &[(1, SpanClass::Special), (3, SpanClass::CallMethod)],
        ),
        // Known words (keywords, builtins) keep their own class
        CallSites::Any => line.map_plain(|text| {
            split_by_groups(text, any_call_regex(), &[(1, SpanClass::CallMethod)], |caps| {
                caps.get(1)
                    .is_some_and(|name| profile.word_class(name.as_str()).is_none())
            })
        }),
    }
}

pub fn punctuation(line: CodeLine) -> CodeLine {
    line.wrap_matches(punctuation_regex(), SpanClass::Special)
}

//! Declarative description of a language for the shared highlighting
//! pipeline.

use std::collections::HashSet;

use crate::comments::CommentDelimiter;
use crate::span_class::SpanClass;

/// Rules for the lexical scan: strings, comments and regex literals.
#[derive(Debug, Clone, Default)]
pub struct LexicalRules {
    /// Characters that open and close string literals.
    pub quotes: &'static [char],
    /// Single quotes only delimit one-character literals (`'a'`, `'\n'`).
    pub char_literals: bool,
    /// Marker that starts a comment running to the end of the line.
    pub line_comment: Option<&'static str>,
    /// The line comment marker only counts at line start or after whitespace.
    pub comment_after_space: bool,
    /// Block comment delimiters, also wrapped when opened and closed on one line.
    pub block_comment: Option<CommentDelimiter>,
    /// `/pattern/flags` literals are recognized.
    pub regex_literals: bool,
}

/// A named set of words highlighted with one class.
#[derive(Debug, Clone)]
pub struct WordClass {
    pub class: SpanClass,
    words: HashSet<String>,
    ignore_case: bool,
}

impl WordClass {
    pub fn new(class: SpanClass, words: &[&str], ignore_case: bool) -> Self {
        let words = words
            .iter()
            .map(|w| {
                if ignore_case {
                    w.to_ascii_lowercase()
                } else {
                    (*w).to_string()
                }
            })
            .collect();
        Self {
            class,
            words,
            ignore_case,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        if self.ignore_case {
            self.words.contains(&word.to_ascii_lowercase())
        } else {
            self.words.contains(word)
        }
    }
}

/// Which call sites get a `md-call-method` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallSites {
    #[default]
    None,
    /// `.method(`
    Methods,
    /// `pkg.Func(`, with the package name marked special.
    Qualified,
    /// Any `name(` that is not a known word.
    Any,
}

/// Everything the shared pipeline needs to know about a language.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub lexical: LexicalRules,
    /// Checked in order; the first class containing a word wins. The first
    /// entry is always the keyword set.
    pub word_classes: Vec<WordClass>,
    /// Numeric literals are highlighted.
    pub numbers: bool,
    /// `@name` decorators are highlighted.
    pub decorators: bool,
    pub calls: CallSites,
    /// `(){}[]` and `;,` are highlighted as special.
    pub punctuation: bool,
}

impl LanguageProfile {
    pub fn new(lexical: LexicalRules, keywords: &[&str]) -> Self {
        Self::build(lexical, keywords, false)
    }

    /// A profile whose words match regardless of case (SQL).
    pub fn case_insensitive(lexical: LexicalRules, keywords: &[&str]) -> Self {
        Self::build(lexical, keywords, true)
    }

    fn build(lexical: LexicalRules, keywords: &[&str], ignore_case: bool) -> Self {
        Self {
            lexical,
            word_classes: vec![WordClass::new(SpanClass::Keyword, keywords, ignore_case)],
            numbers: true,
            decorators: false,
            calls: CallSites::None,
            punctuation: false,
        }
    }

    fn ignore_case(&self) -> bool {
        self.word_classes.first().is_some_and(|c| c.ignore_case)
    }

    pub fn with_words(mut self, class: SpanClass, words: &[&str]) -> Self {
        let ignore_case = self.ignore_case();
        self.word_classes
            .push(WordClass::new(class, words, ignore_case));
        self
    }

    pub fn with_decorators(mut self) -> Self {
        self.decorators = true;
        self
    }

    pub fn with_calls(mut self, calls: CallSites) -> Self {
        self.calls = calls;
        self
    }

    pub fn with_punctuation(mut self) -> Self {
        self.punctuation = true;
        self
    }

    pub fn without_numbers(mut self) -> Self {
        self.numbers = false;
        self
    }

    /// Class of a word, if any word class contains it.
    pub fn word_class(&self, word: &str) -> Option<SpanClass> {
        self.word_classes
            .iter()
            .find(|c| c.contains(word))
            .map(|c| c.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_class_wins() {
        let profile = LanguageProfile::new(LexicalRules::default(), &["if", "true"])
            .with_words(SpanClass::Special, &["true", "null"]);
        assert_eq!(profile.word_class("if"), Some(SpanClass::Keyword));
        assert_eq!(profile.word_class("true"), Some(SpanClass::Keyword));
        assert_eq!(profile.word_class("null"), Some(SpanClass::Special));
        assert_eq!(profile.word_class("x"), None);
    }

    #[test]
    fn case_insensitive_profile_applies_to_added_classes() {
        let profile = LanguageProfile::case_insensitive(LexicalRules::default(), &["select"])
            .with_words(SpanClass::Decorator, &["INTEGER"]);
        assert_eq!(profile.word_class("SeLeCt"), Some(SpanClass::Keyword));
        assert_eq!(profile.word_class("integer"), Some(SpanClass::Decorator));
    }
}

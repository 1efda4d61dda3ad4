//! # Language Registry
//!
//! Maps fence tags (`js`, `Python3`, `golang`) to canonical language keys and
//! dispatches highlighting to the matching [`LanguageTokenizer`].
//!
//! ```
//! use markdown_forge_syntax::registry;
//!
//! assert_eq!(registry().resolve("JS"), "javascript");
//! assert_eq!(registry().resolve("brainfuck"), "brainfuck");
//!
//! let html = registry().highlight_block("py", "x = 1").unwrap();
//! assert_eq!(html, r#"x = <span class="md-number">1</span>"#);
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::comments::{CommentDelimiter, CommentTracker};
use crate::languages;
use crate::tokenizer::LanguageTokenizer;

pub struct LanguageRegistry {
    tokenizers: Vec<Box<dyn LanguageTokenizer>>,
    by_key: HashMap<&'static str, usize>,
    by_alias: HashMap<String, &'static str>,
}

impl LanguageRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            tokenizers: Vec::new(),
            by_key: HashMap::new(),
            by_alias: HashMap::new(),
        }
    }

    /// A registry holding every built-in language.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for tokenizer in languages::builtin() {
            registry.register(tokenizer);
        }
        registry
    }

    /// Add a tokenizer. A later registration for the same key or alias wins.
    pub fn register(&mut self, tokenizer: Box<dyn LanguageTokenizer>) {
        let key = tokenizer.key();
        let index = match self.by_key.get(key) {
            Some(&existing) => {
                self.tokenizers[existing] = tokenizer;
                existing
            }
            None => {
                self.tokenizers.push(tokenizer);
                self.tokenizers.len() - 1
            }
        };
        self.by_key.insert(key, index);
        self.by_alias.insert(key.to_ascii_lowercase(), key);
        for alias in self.tokenizers[index].aliases() {
            self.by_alias.insert(alias.to_ascii_lowercase(), key);
        }
    }

    /// Canonical key for a fence tag. Unknown tags come back unchanged.
    pub fn resolve<'a>(&'a self, tag: &'a str) -> &'a str {
        let trimmed = tag.trim();
        self.by_alias
            .get(&trimmed.to_ascii_lowercase())
            .copied()
            .unwrap_or(tag)
    }

    /// Like [`LanguageRegistry::resolve`], but `extra` aliases are consulted
    /// first. An extra alias may point at another alias.
    pub fn resolve_with(&self, tag: &str, extra: &BTreeMap<String, String>) -> String {
        let trimmed = tag.trim();
        let target = extra
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(trimmed))
            .map_or(tag, |(_, target)| target.as_str());
        self.resolve(target).to_string()
    }

    pub fn get(&self, key: &str) -> Option<&dyn LanguageTokenizer> {
        self.by_key
            .get(key)
            .map(|&index| self.tokenizers[index].as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tokenizers.iter().map(|t| t.key())
    }

    pub fn comment_delimiter(&self, key: &str) -> Option<CommentDelimiter> {
        self.get(key).and_then(|t| t.comment_delimiter())
    }

    /// Highlight one line. An unknown key returns the line as is, unescaped.
    pub fn highlight(&self, key: &str, line: &str) -> String {
        match self.get(key) {
            Some(tokenizer) => tokenizer.highlight(line),
            None => line.to_string(),
        }
    }

    /// Highlight a whole code block by canonical key, tracking block
    /// comments across lines. `None` for an unknown key.
    pub fn highlight_code(&self, key: &str, code: &str) -> Option<String> {
        let tokenizer = self.get(key)?;
        let mut tracker = CommentTracker::new(tokenizer);
        let mut html = code
            .split('\n')
            .map(|line| tracker.line(line))
            .collect::<Vec<_>>()
            .join("\n");
        html.push_str(tracker.finish());
        Some(html)
    }

    /// Resolve a fence tag and highlight a whole code block.
    pub fn highlight_block(&self, tag: &str, code: &str) -> Option<String> {
        let key = self.resolve(tag);
        let html = self.highlight_code(key, code);
        if html.is_none() {
            log::debug!("no highlighter for language tag {tag:?}");
        }
        html
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

//! # markdown-forge-syntax
//!
//! Line-oriented syntax highlighting for fenced code blocks.
//!
//! Highlighting is lexical and pattern based, never a real parse of the
//! code. Each line becomes a flat list of [`Segment`]s: plain text, or a
//! span of one [`SpanClass`]. Passes only ever rewrite plain segments, so
//! spans never nest and a string can never be highlighted as a keyword.
//!
//! ## Architecture Overview
//!
//! ```text
//! fence tag → LanguageRegistry::resolve → canonical key
//!
//! code block → CommentTracker (per block) → LanguageTokenizer (per line)
//!                                              │
//!                     lexical → structure → decorators → calls → words → punctuation
//! ```
//!
//! - [`registry`]: the process-wide [`LanguageRegistry`]
//! - [`comments`]: [`CommentTracker`], carrying block comments across lines
//! - [`tokenizer`]: the [`LanguageTokenizer`] trait
//! - [`profile`]: declarative per-language rules for the shared pipeline
//! - [`passes`]: the pipeline itself
//! - [`lexer`]: Logos lexer used by the word pass
//! - [`languages`]: the built-in languages
//!
//! ## Quick Start
//!
//! ```
//! use markdown_forge_syntax::registry;
//!
//! let html = registry().highlight_block("js", "const x = 1;").unwrap();
//! assert_eq!(
//!     html,
//!     r#"<span class="md-keyword">const</span> x = <span class="md-number">1</span>;"#
//! );
//! ```

use std::sync::OnceLock;

pub mod comments;
pub mod languages;
pub mod lexer;
pub mod line;
pub mod passes;
pub mod profile;
pub mod registry;
pub mod span_class;
pub mod tokenizer;

pub use comments::{CommentDelimiter, CommentState, CommentTracker};
pub use line::{CodeLine, Segment};
pub use profile::{CallSites, LanguageProfile, LexicalRules};
pub use registry::LanguageRegistry;
pub use span_class::SpanClass;
pub use tokenizer::LanguageTokenizer;

/// The shared registry of built-in languages, built on first use.
pub fn registry() -> &'static LanguageRegistry {
    static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();
    REGISTRY.get_or_init(LanguageRegistry::with_defaults)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_shared() {
        assert!(std::ptr::eq(registry(), registry()));
    }

    #[test]
    fn empty_and_blank_lines_are_safe() {
        for key in registry().keys() {
            assert_eq!(registry().highlight(key, ""), "");
            assert_eq!(registry().highlight(key, "   \t"), "   \t");
        }
    }

    #[test]
    fn tokenizers_never_lose_text() {
        let line = r#"fn x() { let s = "a /* b"; } // c <d> & 'e' $f @g"#;
        for key in registry().keys() {
            let tokenizer = registry().get(key).expect("registered key");
            assert_eq!(tokenizer.tokenize(line).text(), line, "{key}");
        }
    }
}

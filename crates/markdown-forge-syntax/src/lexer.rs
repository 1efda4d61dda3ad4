//! # Lexer - Splitting Code Into Words
//!
//! The word pass of the highlighting pipeline runs a small [Logos] lexer over
//! the plain text left between earlier spans. It only needs to know where
//! words and numbers begin and end; deciding whether a word is a keyword is
//! the job of the language profile.
//!
//! [Logos]: https://docs.rs/logos
//!
//! Like every lexer in this workspace it is lossless: **every byte of the
//! input appears in exactly one lexeme**.
//!
//! ```
//! use markdown_forge_syntax::lexer::lex;
//!
//! let input = "let x = 0x1F; // done";
//! let rebuilt: String = lex(input).iter().map(|l| l.text).collect();
//! assert_eq!(input, rebuilt);
//! ```

use logos::Logos;

/// Lexeme kinds recognized in a line of source code.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    /// Any run of whitespace.
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    /// Identifier-shaped word.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    /// Decimal (with `_` separators and an optional fraction) or hex literal.
    #[regex(r"[0-9][0-9_]*(\.[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Number,

    /// Any other single character.
    #[regex(r"[^ \t\r\n\fA-Za-z0-9_]")]
    Symbol,
}

/// A lexeme with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub kind: LexemeKind,
    pub text: &'a str,
}

/// Lex a line of code into lexemes.
pub fn lex(input: &str) -> Vec<Lexeme<'_>> {
    let mut lexemes = Vec::new();
    let mut lexer = LexemeKind::lexer(input);

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        // Unrecognized input is kept as a symbol so no byte is lost
        let kind = result.unwrap_or(LexemeKind::Symbol);
        lexemes.push(Lexeme { kind, text });
    }

    lexemes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lexeme(kind: LexemeKind, text: &str) -> Lexeme<'_> {
        Lexeme { kind, text }
    }

    #[test]
    fn lex_empty_input() {
        assert_eq!(lex(""), vec![]);
    }

    #[test]
    fn lex_assignment() {
        assert_eq!(
            lex("let x_1 = 42;"),
            vec![
                lexeme(LexemeKind::Word, "let"),
                lexeme(LexemeKind::Whitespace, " "),
                lexeme(LexemeKind::Word, "x_1"),
                lexeme(LexemeKind::Whitespace, " "),
                lexeme(LexemeKind::Symbol, "="),
                lexeme(LexemeKind::Whitespace, " "),
                lexeme(LexemeKind::Number, "42"),
                lexeme(LexemeKind::Symbol, ";"),
            ]
        );
    }

    #[test]
    fn lex_numbers() {
        assert_eq!(
            lex("3.14 0xFF 1_000"),
            vec![
                lexeme(LexemeKind::Number, "3.14"),
                lexeme(LexemeKind::Whitespace, " "),
                lexeme(LexemeKind::Number, "0xFF"),
                lexeme(LexemeKind::Whitespace, " "),
                lexeme(LexemeKind::Number, "1_000"),
            ]
        );
    }

    #[test]
    fn lex_method_access_keeps_dot_separate() {
        assert_eq!(
            lex("a.b"),
            vec![
                lexeme(LexemeKind::Word, "a"),
                lexeme(LexemeKind::Symbol, "."),
                lexeme(LexemeKind::Word, "b"),
            ]
        );
    }

    #[test]
    fn non_ascii_is_symbol() {
        assert_eq!(
            lex("é"),
            vec![lexeme(LexemeKind::Symbol, "é")]
        );
    }

    #[test]
    fn all_bytes_preserved() {
        let input = "fn main() { println!(\"héllo\"); } // ✓\t";
        let rebuilt: String = lex(input).iter().map(|l| l.text).collect();
        assert_eq!(input, rebuilt);
    }
}

//! The shared highlighting pipeline.
//!
//! Each pass takes a [`CodeLine`] and returns a new one, only ever rewriting
//! plain segments. The order below is fixed: anything claimed early (a
//! string, a comment) is invisible to every later pass.
//!
//! ```text
//! lexical scan → structure hook → decorators → call sites → words → punctuation
//! ```

pub mod lexical;
pub mod patterns;
pub mod words;

use crate::line::CodeLine;
use crate::tokenizer::LanguageTokenizer;

/// Run the full pipeline for one line.
pub fn run<T: LanguageTokenizer + ?Sized>(tokenizer: &T, line: &str) -> CodeLine {
    if line.trim().is_empty() {
        return CodeLine::new(line);
    }

    let profile = tokenizer.profile();
    let mut code = lexical::scan(line, &profile.lexical);
    code = tokenizer.structure(code);
    if profile.decorators {
        code = patterns::decorators(code);
    }
    code = patterns::calls(code, profile);
    code = words::classify(code, profile);
    if profile.punctuation {
        code = patterns::punctuation(code);
    }
    code
}

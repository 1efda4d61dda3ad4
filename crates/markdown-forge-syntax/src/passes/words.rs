//! Word pass: keywords, word classes and numbers, via the Logos lexer.

use crate::lexer::{LexemeKind, lex};
use crate::line::{CodeLine, Segment};
use crate::profile::LanguageProfile;
use crate::span_class::SpanClass;

pub fn classify(line: CodeLine, profile: &LanguageProfile) -> CodeLine {
    line.map_plain(|text| {
        lex(text)
            .into_iter()
            .map(|lexeme| match lexeme.kind {
                LexemeKind::Word => match profile.word_class(lexeme.text) {
                    Some(class) => Segment::span(class, lexeme.text),
                    None => Segment::plain(lexeme.text),
                },
                LexemeKind::Number if profile.numbers => {
                    Segment::span(SpanClass::Number, lexeme.text)
                }
                _ => Segment::plain(lexeme.text),
            })
            .collect()
    })
}

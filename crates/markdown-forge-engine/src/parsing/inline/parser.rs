use crate::parsing::blocks::kinds::BlockQuote;
use crate::quotes;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, RawHtml},
    placeholders::Placeholders,
};

/// Render the inline markup of one line of text to HTML.
///
/// Text outside recognised constructs is passed through untouched, which
/// keeps the renderer idempotent on its own output.
pub fn render_inline(text: &str) -> String {
    let text = quotes::normalize(text);
    let mut slots = Placeholders::default();

    let text = extract_code_spans(&text, &mut slots);
    let text = Link::images(&text, &mut slots);
    let text = Link::links(&text, &mut slots);
    let text = RawHtml::protect(&text, &mut slots);
    let text = Emphasis::render_all(&text, &mut slots);
    let text = BlockQuote::wrap(&text);

    slots.restore(text)
}

/// Replace every closed code span with a placeholder. Code spans are checked
/// first and suppress all other parsing inside them.
///
/// This is the first pass to issue tokens, so marker characters already in
/// the text are escaped here.
fn extract_code_spans(s: &str, slots: &mut Placeholders) -> String {
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len());
    let mut text_start = cur.pos();

    while !cur.eof() {
        if let Some((start, inner_start, inner_end)) = try_parse_code_span(&mut cur) {
            out.push_str(&Placeholders::escape_markers(&s[text_start..start]));
            out.push_str(&slots.push(CodeSpan::render(&s[inner_start..inner_end])));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    out.push_str(&Placeholders::escape_markers(&s[text_start..]));
    out
}

/// Attempts to parse a code span starting at the current position, returning
/// (start, inner start, inner end).
///
/// Returns `None` if not at a backtick or if the code span isn't closed.
/// On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<(usize, usize, usize)> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    while !cur.eof() {
        if cur.peek() == Some(CodeSpan::TICK) {
            break;
        }
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some((start, inner_start, inner_end))
}

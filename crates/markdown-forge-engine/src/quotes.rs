//! Typographic quote folding.
//!
//! Word processors and some editors turn `'` and `"` into curly quotes.
//! Markdown syntax (and every code fence) expects the ASCII forms, so the
//! document is folded before any line is classified.

use std::borrow::Cow;

/// Single quote look-alikes, folded to `'`.
pub const SINGLE: [char; 5] = ['\u{2018}', '\u{2019}', '\u{201A}', '\u{2039}', '\u{203A}'];

/// Double quote look-alikes, folded to `"`.
pub const DOUBLE: [char; 4] = ['\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}'];

pub fn is_smart_quote(c: char) -> bool {
    SINGLE.contains(&c) || DOUBLE.contains(&c)
}

/// Replace smart quotes with their ASCII equivalent. Borrows when there is
/// nothing to fold.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_smart_quote) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| {
                if SINGLE.contains(&c) {
                    '\''
                } else if DOUBLE.contains(&c) {
                    '"'
                } else {
                    c
                }
            })
            .collect(),
    )
}

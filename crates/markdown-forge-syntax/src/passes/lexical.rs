//! Lexical scan: the first pass, claiming comments, strings and regex
//! literals so no later pass can highlight inside them.
//!
//! Every delimiter is ASCII, so the scan walks bytes and only ever slices the
//! line at positions where it matched one.

use crate::line::{CodeLine, Segment};
use crate::profile::LexicalRules;
use crate::span_class::SpanClass;

/// Characters after which a `/` starts a regex literal rather than a division.
const REGEX_PRECEDERS: &[u8] = b"=(,:;!&|?{}[+-*%~^";

/// Words after which a `/` starts a regex literal.
const REGEX_KEYWORDS: &[&str] = &["return", "typeof", "case", "in", "of"];

pub fn scan(line: &str, rules: &LexicalRules) -> CodeLine {
    let bytes = line.as_bytes();
    let mut out = CodeLine::default();
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let found = block_comment(line, i, rules)
            .map(|len| (SpanClass::Comment, len))
            .or_else(|| line_comment(line, i, rules).map(|len| (SpanClass::Comment, len)))
            .or_else(|| string_literal(line, i, rules).map(|len| (SpanClass::String, len)))
            .or_else(|| regex_literal(line, i, rules).map(|len| (SpanClass::Regex, len)));

        match found {
            Some((class, len)) => {
                out.push(Segment::plain(&line[plain_start..i]));
                out.push(Segment::span(class, &line[i..i + len]));
                i += len;
                plain_start = i;
            }
            None => i += 1,
        }
    }

    out.push(Segment::plain(&line[plain_start..]));
    out
}

/// A block comment starting at `i`, running to its end marker or the end
/// of the line.
fn block_comment(line: &str, i: usize, rules: &LexicalRules) -> Option<usize> {
    let (start, end) = rules.block_comment?.bounds();
    if !line.as_bytes()[i..].starts_with(start.as_bytes()) {
        return None;
    }
    let body = &line[i + start.len()..];
    Some(match body.find(end) {
        Some(j) => start.len() + j + end.len(),
        None => line.len() - i,
    })
}

fn line_comment(line: &str, i: usize, rules: &LexicalRules) -> Option<usize> {
    let marker = rules.line_comment?;
    let bytes = line.as_bytes();
    if !bytes[i..].starts_with(marker.as_bytes()) {
        return None;
    }
    if rules.comment_after_space && i > 0 && !bytes[i - 1].is_ascii_whitespace() {
        return None;
    }
    Some(line.len() - i)
}

fn string_literal(line: &str, i: usize, rules: &LexicalRules) -> Option<usize> {
    let quote = line.as_bytes()[i];
    if !rules.quotes.contains(&(quote as char)) {
        return None;
    }
    if quote == b'\'' && rules.char_literals {
        return char_literal(line, i);
    }

    let bytes = line.as_bytes();
    let mut j = i + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b if b == quote => return Some(j + 1 - i),
            _ => j += 1,
        }
    }
    log::debug!("unterminated string literal: {}", &line[i..]);
    None
}

/// `'a'`, `'\n'`, `'\u{1F600}'`. Anything else (a Rust lifetime, a stray
/// apostrophe) is not a literal.
fn char_literal(line: &str, i: usize) -> Option<usize> {
    let rest = &line[i + 1..];
    if let Some(escaped) = rest.strip_prefix('\\') {
        let first = escaped.chars().next()?;
        let close = escaped[first.len_utf8()..].find('\'')?;
        return (close <= 8).then_some(first.len_utf8() + close + 3);
    }
    let ch = rest.chars().next()?;
    if ch == '\'' {
        return None;
    }
    rest[ch.len_utf8()..]
        .starts_with('\'')
        .then_some(ch.len_utf8() + 2)
}

fn regex_literal(line: &str, i: usize, rules: &LexicalRules) -> Option<usize> {
    if !rules.regex_literals {
        return None;
    }
    let bytes = line.as_bytes();
    if bytes[i] != b'/' || matches!(bytes.get(i + 1), None | Some(b'/' | b'*' | b' ')) {
        return None;
    }
    if !regex_allowed_after(&line[..i]) {
        return None;
    }

    let mut j = i + 1;
    let mut in_class = false;
    loop {
        match bytes.get(j)? {
            b'\\' => j += 2,
            b'[' => {
                in_class = true;
                j += 1;
            }
            b']' => {
                in_class = false;
                j += 1;
            }
            b'/' if !in_class => break,
            _ => j += 1,
        }
    }
    j += 1;
    while bytes.get(j).is_some_and(u8::is_ascii_alphabetic) {
        j += 1;
    }
    Some(j - i)
}

fn regex_allowed_after(before: &str) -> bool {
    let before = before.trim_end();
    match before.as_bytes().last() {
        None => true,
        Some(b) if REGEX_PRECEDERS.contains(b) => true,
        Some(_) => REGEX_KEYWORDS.iter().any(|kw| {
            before.ends_with(kw)
                && !before[..before.len() - kw.len()]
                    .ends_with(|c: char| c.is_alphanumeric() || c == '_')
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::{C_STYLE, CommentDelimiter};
    use pretty_assertions::assert_eq;

    fn js_rules() -> LexicalRules {
        LexicalRules {
            quotes: &['"', '\'', '`'],
            line_comment: Some("//"),
            block_comment: Some(C_STYLE),
            regex_literals: true,
            ..Default::default()
        }
    }

    fn spans(line: &CodeLine) -> Vec<(Option<SpanClass>, &str)> {
        line.segments().iter().map(|s| (s.class(), s.text())).collect()
    }

    #[test]
    fn string_with_escaped_quote() {
        let line = scan(r#"a = "x\"y" + b"#, &js_rules());
        assert_eq!(
            spans(&line),
            vec![
                (None, "a = "),
                (Some(SpanClass::String), r#""x\"y""#),
                (None, " + b"),
            ]
        );
    }

    #[test]
    fn unterminated_string_stays_plain() {
        let line = scan(r#"a = "oops"#, &js_rules());
        assert_eq!(spans(&line), vec![(None, r#"a = "oops"#)]);
    }

    #[test]
    fn comment_markers_inside_strings_are_ignored() {
        let line = scan(r#"url = "http://x" // real"#, &js_rules());
        assert_eq!(
            spans(&line),
            vec![
                (None, "url = "),
                (Some(SpanClass::String), r#""http://x""#),
                (None, " "),
                (Some(SpanClass::Comment), "// real"),
            ]
        );
    }

    #[test]
    fn unclosed_block_comment_runs_to_end() {
        let line = scan("x /* open", &js_rules());
        assert_eq!(
            spans(&line),
            vec![(None, "x "), (Some(SpanClass::Comment), "/* open")]
        );
    }

    #[test]
    fn regex_literal_after_operator() {
        let line = scan("const re = /a[/]b/gi;", &js_rules());
        assert_eq!(
            spans(&line),
            vec![
                (None, "const re = "),
                (Some(SpanClass::Regex), "/a[/]b/gi"),
                (None, ";"),
            ]
        );
    }

    #[test]
    fn division_is_not_regex() {
        let line = scan("x = a / b / c", &js_rules());
        assert_eq!(spans(&line), vec![(None, "x = a / b / c")]);

        let line = scan("x = a/b/c", &js_rules());
        assert_eq!(spans(&line), vec![(None, "x = a/b/c")]);
    }

    #[test]
    fn regex_after_return() {
        let line = scan("return /x+/.test(s)", &js_rules());
        assert_eq!(
            spans(&line),
            vec![
                (None, "return "),
                (Some(SpanClass::Regex), "/x+/"),
                (None, ".test(s)"),
            ]
        );
    }

    #[test]
    fn char_literals_and_lifetimes() {
        let rules = LexicalRules {
            quotes: &['"', '\''],
            char_literals: true,
            ..Default::default()
        };
        let line = scan(r"fn f<'a>(c: char) { c == 'x' || c == '\n' }", &rules);
        let strings: Vec<_> = line
            .segments()
            .iter()
            .filter(|s| s.class() == Some(SpanClass::String))
            .map(|s| s.text())
            .collect();
        assert_eq!(strings, vec!["'x'", r"'\n'"]);
    }

    #[test]
    fn hash_comment_needs_preceding_space() {
        let rules = LexicalRules {
            line_comment: Some("#"),
            comment_after_space: true,
            ..Default::default()
        };
        let line = scan("echo ${#arr} # count", &rules);
        assert_eq!(
            spans(&line),
            vec![
                (None, "echo ${#arr} "),
                (Some(SpanClass::Comment), "# count"),
            ]
        );
    }

    #[test]
    fn symmetric_block_on_one_line() {
        let rules = LexicalRules {
            quotes: &['"'],
            block_comment: Some(CommentDelimiter::Symmetric { marker: "\"\"\"" }),
            ..Default::default()
        };
        let line = scan(r#""""doc""" + "s""#, &rules);
        assert_eq!(
            spans(&line),
            vec![
                (Some(SpanClass::Comment), r#""""doc""""#),
                (None, " + "),
                (Some(SpanClass::String), r#""s""#),
            ]
        );
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let line = scan("let s = 'héllo' // ✓ done", &js_rules());
        assert_eq!(line.text(), "let s = 'héllo' // ✓ done");
    }
}

//! Whole-block highlighting through the shared registry.

use std::path::Path;
use std::sync::OnceLock;

use markdown_forge_syntax::registry;
use pretty_assertions::assert_eq;
use regex::Regex;

include!(concat!(env!("OUT_DIR"), "/fixture_tests.rs"));

fn markup_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<span class="md-[a-z-]+">|</span>"#).expect("Invalid markup regex"))
}

/// Remove highlight spans and undo escaping.
fn strip_markup(html: &str) -> String {
    let text = markup_regex().replace_all(html, "");
    html_escape::decode_html_entities(&text).into_owned()
}

fn assert_balanced(html: &str) {
    let mut depth = 0usize;
    for m in markup_regex().find_iter(html) {
        if m.as_str() == "</span>" {
            assert!(depth > 0, "close without open in:\n{html}");
            depth -= 1;
        } else {
            assert_eq!(depth, 0, "nested span in:\n{html}");
            depth += 1;
        }
    }
    assert_eq!(depth, 0, "unclosed span in:\n{html}");
}

fn fixture_test(name: &str, tag: &str) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let source = std::fs::read_to_string(&path).expect("readable fixture");

    let html = registry()
        .highlight_block(tag, &source)
        .expect("fixture language is registered");

    assert_balanced(&html);
    assert_eq!(strip_markup(&html), source);
    assert_eq!(html.split('\n').count(), source.split('\n').count());
    assert!(!html.contains("<script"), "raw markup leaked");

    let again = registry().highlight_block(tag, &source);
    assert_eq!(again.as_deref(), Some(html.as_str()));
}

#[test]
fn comment_spans_three_lines() {
    let html = registry()
        .highlight_block("javascript", "let a; /* one\ntwo\nthree */ let b;")
        .expect("javascript is registered");
    assert_eq!(
        html,
        concat!(
            r#"<span class="md-keyword">let</span> a; <span class="md-comment">/* one"#,
            "\ntwo\n",
            r#"three */</span> <span class="md-keyword">let</span> b;"#,
        )
    );
}

#[test]
fn unterminated_docstring_keeps_later_lines_plain() {
    let html = registry()
        .highlight_block("python", "\"\"\"never closed\ndef f():\n    return 1")
        .expect("python is registered");
    assert!(!html.contains("md-keyword"));
    assert!(!html.contains("md-number"));
    assert!(html.ends_with("</span>"));
    assert_balanced(&html);
}

#[test]
fn comment_state_does_not_leak_between_blocks() {
    let first = registry()
        .highlight_block("rust", "/* open")
        .expect("rust is registered");
    let second = registry()
        .highlight_block("rust", "let x = 1;")
        .expect("rust is registered");
    assert!(first.ends_with("</span>"));
    assert!(second.starts_with(r#"<span class="md-keyword">let</span>"#));
}

#[test]
fn close_marker_inside_open_comment_reenters_tokenizer() {
    let html = registry()
        .highlight_block("css", "/* a\nb */ .x { color: red; } /* c */")
        .expect("css is registered");
    assert_eq!(
        html,
        concat!(
            r#"<span class="md-comment">/* a"#,
            "\n",
            r#"b */</span> <span class="md-decorator">.x</span> { <span class="md-keyword">color</span>: red; } <span class="md-comment">/* c */</span>"#,
        )
    );
}

#[test]
fn html_comment_across_lines() {
    let html = registry()
        .highlight_block("xml", "<!-- a\n<b> -->\n<c/>")
        .expect("html is registered");
    assert_eq!(
        html,
        concat!(
            r#"<span class="md-comment">&lt;!-- a"#,
            "\n&lt;b&gt; --&gt;</span>\n",
            r#"&lt;<span class="md-keyword">c</span>/&gt;"#,
        )
    );
}

#[test]
fn unknown_language_is_not_highlighted() {
    assert_eq!(registry().highlight_block("brainfuck", "+++"), None);
}

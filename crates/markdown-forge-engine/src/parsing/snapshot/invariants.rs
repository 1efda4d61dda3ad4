use crate::parsing::{ParsedDoc, blocks::BlockKind, front_matter::FrontMatter};

const CONTAINER_OPEN: &str = r#"<div class="md-code-container">"#;
const CODE_CLOSE: &str = "</code></pre>";
const SPAN_OPEN: &str = "<span class=\"md-";
const SPAN_CLOSE: &str = "</span>";

/// Validates rendered output against the document it came from.
///
/// Asserts that:
/// - there is exactly one code container per code block
/// - every container's highlight spans are balanced and never nest
/// - no front matter delimiter leaked ahead of the first block
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &ParsedDoc, html: &str) {
    let code_blocks = doc
        .blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Code)
        .count();
    let containers = html.matches(CONTAINER_OPEN).count();
    assert_eq!(
        containers, code_blocks,
        "expected {code_blocks} code containers, found {containers}"
    );

    for (i, code) in code_regions(html).enumerate() {
        let mut marks: Vec<(usize, bool)> = code
            .match_indices(SPAN_OPEN)
            .map(|(at, _)| (at, true))
            .chain(code.match_indices(SPAN_CLOSE).map(|(at, _)| (at, false)))
            .collect();
        marks.sort_unstable();

        let mut open = false;
        for (at, opens) in marks {
            assert!(
                open != opens,
                "code block {i}: {} at byte {at}",
                if opens { "nested span" } else { "close without open" }
            );
            open = opens;
        }
        assert!(!open, "code block {i}: unclosed span");
    }

    if doc.front_matter.is_some() {
        assert!(
            !html.starts_with(FrontMatter::DELIMITER) && !html.starts_with("<p>---</p>"),
            "front matter delimiter leaked into output"
        );
    }
}

/// The inner HTML of each `<code>` element, in order.
fn code_regions(html: &str) -> impl Iterator<Item = &str> {
    html.split(CONTAINER_OPEN).skip(1).map(|rest| {
        let start = rest.find("<code").and_then(|i| rest[i..].find('>').map(|j| i + j + 1));
        let end = rest.find(CODE_CLOSE);
        match (start, end) {
            (Some(start), Some(end)) if start <= end => &rest[start..end],
            _ => "",
        }
    })
}

use markdown_forge_syntax::span_class::CLOSE_TAG;

use crate::parsing::inline::placeholders::Placeholders;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
    pub const CLASS: &'static str = "md-inline-code";

    /// Characters that would otherwise be read as markup once the span is
    /// back in the surrounding text.
    pub const ENTITIES: [(char, &'static str); 9] = [
        ('&', "&amp;"),
        ('<', "&lt;"),
        ('>', "&gt;"),
        ('*', "&#42;"),
        ('_', "&#95;"),
        ('[', "&#91;"),
        (']', "&#93;"),
        ('(', "&#40;"),
        (')', "&#41;"),
    ];

    pub fn render(inner: &str) -> String {
        let mut html = format!(r#"<span class="{}">"#, Self::CLASS);
        for c in inner.chars() {
            let entity = Self::ENTITIES
                .iter()
                .find(|(raw, _)| *raw == c)
                .map(|(_, entity)| *entity)
                .or_else(|| Placeholders::marker_entity(c));
            match entity {
                Some(entity) => html.push_str(entity),
                None => html.push(c),
            }
        }
        html.push_str(CLOSE_TAG);
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            CodeSpan::render("a<b> && *x* _y_ [l](u)"),
            r#"<span class="md-inline-code">a&lt;b&gt; &amp;&amp; &#42;x&#42; &#95;y&#95; &#91;l&#93;&#40;u&#41;</span>"#
        );
    }

    #[test]
    fn private_use_markers_kept_as_references() {
        assert_eq!(
            CodeSpan::render("\u{E000}icon\u{E001}"),
            r#"<span class="md-inline-code">&#xE000;icon&#xE001;</span>"#
        );
    }

    #[test]
    fn empty_span() {
        assert_eq!(
            CodeSpan::render(""),
            r#"<span class="md-inline-code"></span>"#
        );
    }
}

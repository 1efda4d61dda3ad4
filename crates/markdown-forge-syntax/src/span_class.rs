//! Highlight span categories and their fixed CSS class names.
//!
//! The class names are part of the generated HTML contract: stylesheets
//! written against them must keep working, so they never change.

/// Closing tag shared by every highlight span.
pub const CLOSE_TAG: &str = "</span>";

/// Semantic category of a highlighted run of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanClass {
    /// Reserved word of the language (`const`, `def`, `SELECT`).
    Keyword,
    /// String or character literal, quotes included.
    String,
    /// Numeric literal, optionally with a CSS unit.
    Number,
    /// Line or block comment, delimiters included.
    Comment,
    /// Decorator, annotation, attribute or selector.
    Decorator,
    /// Type or class name.
    Class,
    /// Regular expression literal.
    Regex,
    /// Name of a called function or method.
    CallMethod,
    /// Literal constants, variables and other notable identifiers.
    Special,
}

impl SpanClass {
    /// CSS class emitted for this category.
    pub const fn css_class(self) -> &'static str {
        match self {
            SpanClass::Keyword => "md-keyword",
            SpanClass::String => "md-string",
            SpanClass::Number => "md-number",
            SpanClass::Comment => "md-comment",
            SpanClass::Decorator => "md-decorator",
            SpanClass::Class => "md-class",
            SpanClass::Regex => "md-regex",
            SpanClass::CallMethod => "md-call-method",
            SpanClass::Special => "md-special",
        }
    }

    /// Opening `<span>` tag for this category.
    pub const fn open_tag(self) -> &'static str {
        match self {
            SpanClass::Keyword => r#"<span class="md-keyword">"#,
            SpanClass::String => r#"<span class="md-string">"#,
            SpanClass::Number => r#"<span class="md-number">"#,
            SpanClass::Comment => r#"<span class="md-comment">"#,
            SpanClass::Decorator => r#"<span class="md-decorator">"#,
            SpanClass::Class => r#"<span class="md-class">"#,
            SpanClass::Regex => r#"<span class="md-regex">"#,
            SpanClass::CallMethod => r#"<span class="md-call-method">"#,
            SpanClass::Special => r#"<span class="md-special">"#,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SpanClass; 9] = [
        SpanClass::Keyword,
        SpanClass::String,
        SpanClass::Number,
        SpanClass::Comment,
        SpanClass::Decorator,
        SpanClass::Class,
        SpanClass::Regex,
        SpanClass::CallMethod,
        SpanClass::Special,
    ];

    #[test]
    fn open_tag_carries_css_class() {
        for class in ALL {
            assert_eq!(
                class.open_tag(),
                format!(r#"<span class="{}">"#, class.css_class())
            );
        }
    }

    #[test]
    fn css_classes_are_distinct() {
        let mut names: Vec<_> = ALL.iter().map(|c| c.css_class()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }
}

use super::kinds::{CodeFence, FenceSig, Heading, ListItem, ListKind};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Zero-based line index in the document.
    pub index: usize,
    /// The line without its trailing `\r`.
    pub raw: &'a str,
    /// `raw` with surrounding whitespace removed.
    pub trimmed: &'a str,
    pub is_blank: bool,
    /// If the trimmed line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
    /// Heading level and text.
    pub heading: Option<(u8, &'a str)>,
    /// List marker kind and item text.
    pub list: Option<(ListKind, &'a str)>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, index: usize, line: &'a str) -> LineClass<'a> {
        let raw = line.strip_suffix('\r').unwrap_or(line);
        let trimmed = raw.trim();

        LineClass {
            index,
            raw,
            trimmed,
            is_blank: trimmed.is_empty(),
            fence_sig: CodeFence::sig(trimmed),
            heading: Heading::parse(trimmed),
            list: ListItem::parse(trimmed),
        }
    }
}

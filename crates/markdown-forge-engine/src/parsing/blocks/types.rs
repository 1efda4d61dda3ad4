use super::kinds::ListKind;

/// The kind of a block element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` to `#####`; the level is 1 to 5.
    Heading(u8),
    /// A fenced code block. Its content is raw source, not HTML.
    Code,
    UnorderedList,
    OrderedList,
    ListItem,
    /// One non-blank line of prose.
    Paragraph,
}

impl BlockKind {
    pub fn list(kind: ListKind) -> Self {
        match kind {
            ListKind::Unordered => BlockKind::UnorderedList,
            ListKind::Ordered => BlockKind::OrderedList,
        }
    }

    /// The HTML element this block serializes to.
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Heading(1) => "h1",
            BlockKind::Heading(2) => "h2",
            BlockKind::Heading(3) => "h3",
            BlockKind::Heading(4) => "h4",
            BlockKind::Heading(_) => "h5",
            BlockKind::Code => "code",
            BlockKind::UnorderedList => "ul",
            BlockKind::OrderedList => "ol",
            BlockKind::ListItem => "li",
            BlockKind::Paragraph => "p",
        }
    }
}

/// A parsed block element.
///
/// For text blocks `content` is inline-rendered HTML. For code blocks it is
/// the raw source lines joined with `\n`. For lists it is the joined markup
/// of the items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub content: String,
    /// Fence tag, trimmed and lower-cased. Only set on code blocks.
    pub language: Option<String>,
}

impl Block {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            language: None,
        }
    }

    pub fn code(content: impl Into<String>, language: Option<String>) -> Self {
        Self {
            kind: BlockKind::Code,
            content: content.into(),
            language,
        }
    }
}

//! # Block Comments Across Lines
//!
//! Tokenizers see one line at a time, so a block comment opened on one line
//! and closed several lines later needs state that outlives a single call.
//! [`CommentTracker`] holds that state for one code block.
//!
//! ```text
//! Closed --(start without end)--> Open
//! Open   --(end)----------------> Closed   (rest of line re-examined)
//! Open   --(no end)-------------> Open     (line escaped verbatim)
//! ```
//!
//! The tracker only ever branches on the [`CommentDelimiter`] variant, never
//! on which language it is highlighting.

use crate::line::Segment;
use crate::span_class::{CLOSE_TAG, SpanClass};
use crate::tokenizer::LanguageTokenizer;

/// How a language delimits block comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentDelimiter {
    /// Distinct opening and closing markers (`/*` `*/`, `<!--` `-->`).
    Paired {
        start: &'static str,
        end: &'static str,
    },
    /// One marker that both opens and closes (`"""`).
    Symmetric { marker: &'static str },
}

/// `/* ... */`
pub const C_STYLE: CommentDelimiter = CommentDelimiter::Paired {
    start: "/*",
    end: "*/",
};

impl CommentDelimiter {
    /// Opening and closing markers.
    pub fn bounds(self) -> (&'static str, &'static str) {
        match self {
            CommentDelimiter::Paired { start, end } => (start, end),
            CommentDelimiter::Symmetric { marker } => (marker, marker),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentState {
    #[default]
    Closed,
    Open,
}

/// Per code block state machine deciding whether a line starts inside an
/// open block comment.
pub struct CommentTracker<'t> {
    tokenizer: &'t dyn LanguageTokenizer,
    delimiter: Option<CommentDelimiter>,
    state: CommentState,
}

impl<'t> CommentTracker<'t> {
    pub fn new(tokenizer: &'t dyn LanguageTokenizer) -> Self {
        Self {
            tokenizer,
            delimiter: tokenizer.comment_delimiter(),
            state: CommentState::Closed,
        }
    }

    pub fn state(&self) -> CommentState {
        self.state
    }

    /// Highlight one physical line, returning HTML.
    ///
    /// While a comment is open the returned HTML deliberately lacks the
    /// closing tag of the comment span; it arrives with a later line or
    /// from [`CommentTracker::finish`].
    pub fn line(&mut self, line: &str) -> String {
        match self.delimiter {
            None => self.tokenizer.highlight(line),
            Some(CommentDelimiter::Paired { start, end }) => self.paired(line, start, end),
            Some(CommentDelimiter::Symmetric { marker }) => self.symmetric(line, marker),
        }
    }

    /// Close any comment still open at the end of the block.
    pub fn finish(&mut self) -> &'static str {
        match std::mem::take(&mut self.state) {
            CommentState::Open => {
                log::debug!(
                    "unterminated block comment in {} code block",
                    self.tokenizer.key()
                );
                CLOSE_TAG
            }
            CommentState::Closed => "",
        }
    }

    fn paired(&mut self, line: &str, start: &str, end: &str) -> String {
        let mut html = String::new();
        let mut rest = line;
        loop {
            match self.state {
                CommentState::Open => match rest.find(end) {
                    None => {
                        html.push_str(&html_escape::encode_text(rest));
                        return html;
                    }
                    Some(i) => {
                        let close = i + end.len();
                        html.push_str(&html_escape::encode_text(&rest[..close]));
                        html.push_str(CLOSE_TAG);
                        self.state = CommentState::Closed;
                        rest = &rest[close..];
                        if rest.is_empty() {
                            return html;
                        }
                    }
                },
                CommentState::Closed => {
                    let code = self.tokenizer.tokenize(rest);
                    if opens_comment(code.segments().last(), start, end) {
                        html.push_str(&code.to_html_unclosed());
                        self.state = CommentState::Open;
                    } else {
                        html.push_str(&code.to_html());
                    }
                    return html;
                }
            }
        }
    }

    fn symmetric(&mut self, line: &str, marker: &str) -> String {
        if !line.contains(marker) {
            return match self.state {
                CommentState::Open => html_escape::encode_text(line).into_owned(),
                CommentState::Closed => self.tokenizer.highlight(line),
            };
        }

        let mut html = String::new();
        let mut rest = line;
        while let Some(i) = rest.find(marker) {
            let after = i + marker.len();
            match self.state {
                CommentState::Closed => {
                    html.push_str(&html_escape::encode_text(&rest[..i]));
                    html.push_str(SpanClass::Comment.open_tag());
                    html.push_str(&html_escape::encode_text(marker));
                    self.state = CommentState::Open;
                }
                CommentState::Open => {
                    html.push_str(&html_escape::encode_text(&rest[..after]));
                    html.push_str(CLOSE_TAG);
                    self.state = CommentState::Closed;
                }
            }
            rest = &rest[after..];
        }
        html.push_str(&html_escape::encode_text(rest));
        html
    }
}

/// The tokenizer ran a comment to the end of the line without closing it.
fn opens_comment(last: Option<&Segment>, start: &str, end: &str) -> bool {
    match last {
        Some(Segment::Span {
            class: SpanClass::Comment,
            text,
        }) => text
            .strip_prefix(start)
            .is_some_and(|body| !body.contains(end)),
        _ => false,
    }
}

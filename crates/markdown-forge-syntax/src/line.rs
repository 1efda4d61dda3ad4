//! A line of code as a flat sequence of plain and highlighted segments.
//!
//! Segments hold raw (unescaped) text. Escaping happens once, in
//! [`CodeLine::to_html`], which is what keeps passes from ever matching
//! inside markup produced by an earlier pass.

use regex::Regex;

use crate::span_class::{CLOSE_TAG, SpanClass};

/// One run of text within a [`CodeLine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text no pass has claimed yet.
    Plain(String),
    /// Text claimed by a pass. Later passes never look inside it.
    Span { class: SpanClass, text: String },
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Segment::Plain(text.into())
    }

    pub fn span(class: SpanClass, text: impl Into<String>) -> Self {
        Segment::Span {
            class,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Span { text, .. } => text,
        }
    }

    pub fn class(&self) -> Option<SpanClass> {
        match self {
            Segment::Plain(_) => None,
            Segment::Span { class, .. } => Some(*class),
        }
    }
}

/// A single line of code split into segments.
///
/// Concatenating the text of every segment always yields the original line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeLine {
    segments: Vec<Segment>,
}

impl CodeLine {
    /// A line consisting of a single plain segment.
    pub fn new(text: &str) -> Self {
        let mut line = Self::default();
        line.push(Segment::plain(text));
        line
    }

    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut line = Self::default();
        for segment in segments {
            line.push(segment);
        }
        line
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// The raw text of the whole line.
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a segment. Empty segments are dropped and adjacent plain
    /// segments are merged.
    pub fn push(&mut self, segment: Segment) {
        if segment.text().is_empty() {
            return;
        }
        if let Segment::Plain(text) = &segment
            && let Some(Segment::Plain(last)) = self.segments.last_mut()
        {
            last.push_str(text);
            return;
        }
        self.segments.push(segment);
    }

    /// Rewrite every plain segment with `f`. Spans pass through untouched.
    pub fn map_plain(self, mut f: impl FnMut(&str) -> Vec<Segment>) -> Self {
        let mut out = Self::default();
        for segment in self.segments {
            match segment {
                Segment::Plain(text) => {
                    for piece in f(&text) {
                        out.push(piece);
                    }
                }
                span => out.push(span),
            }
        }
        out
    }

    /// Wrap every match of `re` in plain text as a `class` span.
    pub fn wrap_matches(self, re: &Regex, class: SpanClass) -> Self {
        self.map_plain(|text| {
            let mut pieces = Vec::new();
            let mut last = 0;
            for m in re.find_iter(text) {
                pieces.push(Segment::plain(&text[last..m.start()]));
                pieces.push(Segment::span(class, m.as_str()));
                last = m.end();
            }
            pieces.push(Segment::plain(&text[last..]));
            pieces
        })
    }

    /// Wrap selected capture groups of every match of `re`.
    ///
    /// `groups` maps a capture group index to the class it receives; groups
    /// not listed stay plain.
    pub fn wrap_groups(self, re: &Regex, groups: &[(usize, SpanClass)]) -> Self {
        self.map_plain(|text| split_by_groups(text, re, groups, |_| true))
    }

    /// Render as HTML, escaping text and closing every span.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for segment in &self.segments {
            write_segment(&mut html, segment, true);
        }
        html
    }

    /// Render as HTML but leave the final span open.
    ///
    /// Used when a block comment runs past the end of the line; the caller
    /// is then responsible for emitting the closing tag.
    pub fn to_html_unclosed(&self) -> String {
        let mut html = String::new();
        let count = self.segments.len();
        for (i, segment) in self.segments.iter().enumerate() {
            write_segment(&mut html, segment, i + 1 < count);
        }
        html
    }
}

fn write_segment(html: &mut String, segment: &Segment, close: bool) {
    match segment {
        Segment::Plain(text) => html.push_str(&html_escape::encode_text(text)),
        Segment::Span { class, text } => {
            html.push_str(class.open_tag());
            html.push_str(&html_escape::encode_text(text));
            if close {
                html.push_str(CLOSE_TAG);
            }
        }
    }
}

/// Split `text` on the matches of `re`, wrapping the listed capture groups.
///
/// Matches for which `accept` returns false are left plain. Groups must
/// appear in `groups` in the order they occur in the match and must not
/// overlap.
pub fn split_by_groups(
    text: &str,
    re: &Regex,
    groups: &[(usize, SpanClass)],
    mut accept: impl FnMut(&regex::Captures<'_>) -> bool,
) -> Vec<Segment> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for caps in re.captures_iter(text) {
        if !accept(&caps) {
            continue;
        }
        for &(index, class) in groups {
            if let Some(group) = caps.get(index)
                && group.start() >= last
                && !group.as_str().is_empty()
            {
                pieces.push(Segment::plain(&text[last..group.start()]));
                pieces.push(Segment::span(class, group.as_str()));
                last = group.end();
            }
        }
    }
    pieces.push(Segment::plain(&text[last..]));
    pieces
}

use std::borrow::Cow;

/// Rendered fragments parked behind opaque tokens so later passes can't
/// see into them.
///
/// A token is `U+E000 <index> U+E001`. Both markers are private-use
/// characters; any already in the input are written as character
/// references before the first token is issued.
#[derive(Debug, Default)]
pub struct Placeholders {
    html: Vec<String>,
}

impl Placeholders {
    pub const OPEN: char = '\u{E000}';
    pub const CLOSE: char = '\u{E001}';
    pub const OPEN_ENTITY: &'static str = "&#xE000;";
    pub const CLOSE_ENTITY: &'static str = "&#xE001;";

    pub fn is_marker(c: char) -> bool {
        c == Self::OPEN || c == Self::CLOSE
    }

    /// Character reference for a marker, `None` for any other char.
    pub fn marker_entity(c: char) -> Option<&'static str> {
        match c {
            Self::OPEN => Some(Self::OPEN_ENTITY),
            Self::CLOSE => Some(Self::CLOSE_ENTITY),
            _ => None,
        }
    }

    /// Replace marker characters in untrusted text with character
    /// references, which render as the same glyph.
    pub fn escape_markers(text: &str) -> Cow<'_, str> {
        if !text.contains(Self::is_marker) {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len() + 8);
        for c in text.chars() {
            match Self::marker_entity(c) {
                Some(entity) => out.push_str(entity),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }

    /// Park `html` and return the token standing in for it.
    pub fn push(&mut self, html: String) -> String {
        self.html.push(html);
        Self::token(self.html.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    /// Expand every token in one pass over `text`. A fragment only holds
    /// tokens issued before it, so nested expansion always terminates.
    pub fn restore(self, text: String) -> String {
        if self.is_empty() {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        self.expand_into(&text, self.html.len(), &mut out);
        out
    }

    fn expand_into(&self, text: &str, limit: usize, out: &mut String) {
        let mut rest = text;
        while let Some(start) = rest.find(Self::OPEN) {
            out.push_str(&rest[..start]);
            let after = &rest[start + Self::OPEN.len_utf8()..];
            match Self::parse_token(after) {
                Some((index, end)) if index < limit => {
                    self.expand_into(&self.html[index], index, out);
                    rest = &after[end + Self::CLOSE.len_utf8()..];
                }
                _ => {
                    out.push(Self::OPEN);
                    rest = after;
                }
            }
        }
        out.push_str(rest);
    }

    /// Index and close-marker offset of a token body.
    fn parse_token(after_open: &str) -> Option<(usize, usize)> {
        let end = after_open.find(Self::CLOSE)?;
        let index = after_open[..end].parse().ok()?;
        Some((index, end))
    }

    fn token(index: usize) -> String {
        format!("{}{index}{}", Self::OPEN, Self::CLOSE)
    }
}

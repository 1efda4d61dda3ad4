use crate::metadata::Metadata;

/// A `---` delimited key/value block at the very start of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    /// Interior lines, trimmed, delimiters excluded.
    pub lines: Vec<String>,
}

impl FrontMatter {
    pub const DELIMITER: &'static str = "---";

    /// Index of the closing delimiter line.
    ///
    /// Front matter exists only when the first line is a delimiter and at
    /// least two delimiter lines occur in the document.
    pub fn locate<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
        let is_delimiter = |line: &S| line.as_ref().trim() == Self::DELIMITER;
        if !lines.first().is_some_and(is_delimiter) {
            return None;
        }
        lines
            .iter()
            .skip(1)
            .position(is_delimiter)
            .map(|offset| offset + 1)
    }

    /// Split off the front matter, returning it with the index of the first
    /// body line.
    pub fn split<S: AsRef<str>>(lines: &[S]) -> Option<(FrontMatter, usize)> {
        let close = Self::locate(lines)?;
        let interior = lines[1..close]
            .iter()
            .map(|line| line.as_ref().trim().to_string())
            .collect();
        Some((FrontMatter { lines: interior }, close + 1))
    }

    pub fn metadata(&self) -> Metadata {
        Metadata::from_lines(&self.lines)
    }
}

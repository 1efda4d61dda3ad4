#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// List item markers: `- `, `* ` and `1. `.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];
    pub const ORDINAL_SUFFIX: &'static str = ". ";

    /// Kind and item text of a trimmed list line.
    pub fn parse(trimmed: &str) -> Option<(ListKind, &str)> {
        if let Some(text) = Self::BULLETS
            .iter()
            .find_map(|bullet| trimmed.strip_prefix(bullet))
        {
            return Some((ListKind::Unordered, text.trim()));
        }

        let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        trimmed[digits..]
            .strip_prefix(Self::ORDINAL_SUFFIX)
            .map(|text| (ListKind::Ordered, text.trim()))
    }
}

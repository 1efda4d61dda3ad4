/// Blockquote prefixes, `>` optionally repeated and spaced.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';
    pub const OPEN_TAG: &'static str = "<blockquote>";
    pub const CLOSE_TAG: &'static str = "</blockquote>";

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles `> text`, `>> nested` and `> > spaced nested`.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                depth = depth.saturating_add(1);
                i += 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        if depth == 0 {
            return (0, 0);
        }
        (depth, i)
    }

    /// Wrap a rendered line in one `<blockquote>` per prefix level.
    /// Lines without a prefix come back unchanged.
    pub fn wrap(line: &str) -> String {
        let (depth, offset) = Self::strip_prefixes(line);
        let depth = usize::from(depth);
        format!(
            "{}{}{}",
            Self::OPEN_TAG.repeat(depth),
            &line[offset..],
            Self::CLOSE_TAG.repeat(depth)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefixes("hello"), (0, 0));
        assert_eq!(BlockQuote::strip_prefixes("  hello"), (0, 0));
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> hello"), (1, 2));
    }

    #[test]
    fn strip_double_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> > hello"), (2, 4));
    }

    #[test]
    fn strip_nested_quote_no_space() {
        assert_eq!(BlockQuote::strip_prefixes(">> hello"), (2, 3));
    }

    #[test]
    fn wrap_per_level() {
        assert_eq!(BlockQuote::wrap("plain"), "plain");
        assert_eq!(BlockQuote::wrap("> one"), "<blockquote>one</blockquote>");
        assert_eq!(
            BlockQuote::wrap(">> two"),
            "<blockquote><blockquote>two</blockquote></blockquote>"
        );
        assert_eq!(BlockQuote::wrap(">"), "<blockquote></blockquote>");
    }
}

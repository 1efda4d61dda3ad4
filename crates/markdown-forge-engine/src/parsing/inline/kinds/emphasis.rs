use crate::parsing::inline::placeholders::Placeholders;

/// One emphasis delimiter and the element it renders to.
#[derive(Debug, Clone, Copy)]
pub struct Emphasis {
    pub delim: &'static str,
    pub tag: &'static str,
    /// Whether the delimiter may open or close inside a word.
    pub intraword: bool,
}

impl Emphasis {
    /// Strong forms first; `**` must be claimed before `*` sees it.
    pub const ORDER: [Emphasis; 4] = [
        Emphasis::new("**", "b", true),
        Emphasis::new("__", "b", false),
        Emphasis::new("*", "i", true),
        Emphasis::new("_", "i", false),
    ];

    pub const fn new(delim: &'static str, tag: &'static str, intraword: bool) -> Self {
        Self {
            delim,
            tag,
            intraword,
        }
    }

    /// Render all emphasis in `text`. Each match is parked in `slots`, so an
    /// outer delimiter can never pair with one inside a rendered element.
    pub fn render_all(text: &str, slots: &mut Placeholders) -> String {
        let mut text = text.to_string();
        for kind in Self::ORDER {
            text = kind.render_pass(&text, slots);
        }
        text
    }

    /// One left-to-right scan pairing each opener with the first closer
    /// after it.
    fn render_pass(&self, text: &str, slots: &mut Placeholders) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        while let Some(open) = self.next_opener(text, copied) {
            let body = open + self.delim.len();
            // Every later opener would search a subset of the same closers.
            let Some(close) = self.next_closer(text, body) else {
                break;
            };
            out.push_str(&text[copied..open]);
            let inner = Self::render_all(&text[body..close], slots);
            out.push_str(&slots.push(format!("<{0}>{inner}</{0}>", self.tag)));
            copied = close + self.delim.len();
        }
        out.push_str(&text[copied..]);
        out
    }

    fn next_opener(&self, text: &str, from: usize) -> Option<usize> {
        text[from..]
            .char_indices()
            .map(|(i, _)| from + i)
            .find(|&open| self.opens_at(text, open))
    }

    /// First closer leaving a non-empty body.
    fn next_closer(&self, text: &str, body: usize) -> Option<usize> {
        text[body..]
            .char_indices()
            .skip(1)
            .map(|(j, _)| body + j)
            .find(|&close| self.closes_at(text, close))
    }

    fn marker(&self) -> char {
        self.delim.chars().next().unwrap_or_default()
    }

    /// An opener is followed by a visible character that does not extend
    /// the delimiter run.
    fn opens_at(&self, text: &str, i: usize) -> bool {
        text[i..].starts_with(self.delim)
            && text[i + self.delim.len()..]
                .chars()
                .next()
                .is_some_and(|c| !c.is_whitespace() && c != self.marker())
            && (self.intraword || !text[..i].chars().next_back().is_some_and(char::is_alphanumeric))
    }

    fn closes_at(&self, text: &str, i: usize) -> bool {
        text[i..].starts_with(self.delim)
            && text[..i]
                .chars()
                .next_back()
                .is_some_and(|c| !c.is_whitespace() && c != self.marker())
            && (self.intraword
                || !text[i + self.delim.len()..]
                    .chars()
                    .next()
                    .is_some_and(char::is_alphanumeric))
    }
}

use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::placeholders::Placeholders;

/// HTML tags already present in the text, kept out of reach of emphasis.
pub struct RawHtml;

impl RawHtml {
    fn tag_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"<!--.*?-->|</?[A-Za-z][^<>]*>").expect("Invalid html tag regex")
        })
    }

    pub fn protect(text: &str, slots: &mut Placeholders) -> String {
        Self::tag_regex()
            .replace_all(text, |caps: &regex::Captures| slots.push(caps[0].to_string()))
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tags_are_parked() {
        let mut slots = Placeholders::default();
        let out = RawHtml::protect(r#"<a href="x_y_z">t</a> 1 < 2"#, &mut slots);
        assert_eq!(slots.len(), 2);
        assert!(!out.contains("x_y_z"));
        assert!(out.ends_with("t\u{E000}1\u{E001} 1 < 2"));
        assert_eq!(slots.restore(out), r#"<a href="x_y_z">t</a> 1 < 2"#);
    }
}

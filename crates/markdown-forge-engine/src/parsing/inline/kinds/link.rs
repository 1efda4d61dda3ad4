use std::sync::OnceLock;

use html_escape::encode_double_quoted_attribute;
use regex::{Captures, Regex};

use super::Emphasis;
use crate::parsing::inline::placeholders::Placeholders;

/// `[text](url)` links and `![alt](url)` images.
pub struct Link;

impl Link {
    fn image_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)\s]*)\)").expect("Invalid image regex"))
    }

    fn link_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\[([^\]]*)\]\(([^)\s]*)\)").expect("Invalid link regex"))
    }

    pub fn images(text: &str, slots: &mut Placeholders) -> String {
        Self::image_regex()
            .replace_all(text, |caps: &Captures| {
                slots.push(format!(
                    r#"<img src="{}" alt="{}" />"#,
                    encode_double_quoted_attribute(&caps[2]),
                    encode_double_quoted_attribute(&caps[1]),
                ))
            })
            .into_owned()
    }

    /// Link text gets emphasis; nothing else is rendered inside it.
    pub fn links(text: &str, slots: &mut Placeholders) -> String {
        Self::link_regex()
            .replace_all(text, |caps: &Captures| {
                let label = Emphasis::render_all(&caps[1], slots);
                slots.push(format!(
                    r#"<a href="{}">{label}</a>"#,
                    encode_double_quoted_attribute(&caps[2]),
                ))
            })
            .into_owned()
    }
}

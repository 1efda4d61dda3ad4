//! Value coercion by key name.
//!
//! | key contains / matches | value |
//! |---|---|
//! | `keyword` | comma separated [`MetadataValue::List`] |
//! | `slug` | URL slug text |
//! | `date`, `created_at`, `createdat`, `creation_date` | date, else number, else text |
//! | anything else | number, else text |

use crate::quotes;

use super::{MetadataValue, date};

const DATE_KEYS: [&str; 4] = ["date", "created_at", "createdat", "creation_date"];

pub fn coerce(key: &str, value: &str) -> MetadataValue {
    let key = normalize(key);
    if key.contains("keyword") {
        MetadataValue::List(keywords(value))
    } else if key.contains("slug") {
        MetadataValue::Text(slugify(strip_quotes(value)))
    } else if DATE_KEYS.iter().any(|k| key.contains(k)) {
        let unquoted = strip_quotes(value);
        match (date::parse(unquoted), number(unquoted)) {
            (Some(date), _) => MetadataValue::Date(date),
            (None, Some(n)) => MetadataValue::Number(n),
            (None, None) => MetadataValue::Text(value.to_string()),
        }
    } else {
        let unquoted = strip_quotes(value);
        match number(unquoted) {
            Some(n) => MetadataValue::Number(n),
            None => MetadataValue::Text(unquoted.to_string()),
        }
    }
}

/// Double quotes and smart quotes removed, trimmed, lower-cased. ASCII
/// single quotes survive.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|&c| c != '"' && !quotes::is_smart_quote(c))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// Leading and trailing runs of `"`, `'` and `` ` `` removed.
pub fn strip_quotes(s: &str) -> &str {
    s.trim_matches(['"', '\'', '`'])
}

pub fn keywords(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|kw| normalize(&kw.replace(['"', '\'', '|'], "")))
        .filter(|kw| !kw.is_empty())
        .collect()
}

/// Lower-case ASCII letters, digits and single hyphens; no leading or
/// trailing hyphen.
pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    for c in s.to_lowercase().chars() {
        if c == '-' || c.is_whitespace() {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        }
    }
    slug.trim_matches('-').to_string()
}

/// The whole value as a finite number.
pub fn number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

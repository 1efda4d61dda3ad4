use std::sync::OnceLock;

use regex::Regex;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

fn iso_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})(?:[T ]\d{1,2}:\d{2}(?::\d{2}(?:\.\d+)?)?\s*(?:Z|[+-]\d{2}:?\d{2})?)?$",
        )
        .expect("Invalid iso date regex")
    })
}

fn us_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("Invalid us date regex"))
}

fn month_first_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z]+)\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})$")
            .expect("Invalid month-first date regex")
    })
}

fn day_first_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2})(?:st|nd|rd|th)?\s+([A-Za-z]+)\.?,?\s+(\d{4})$")
            .expect("Invalid day-first date regex")
    })
}

/// Parse a calendar date into `YYYY-MM-DD`.
///
/// Accepts `2024-03-05`, `2024/03/05`, ISO date-times (the time is
/// dropped), `03/05/2024` (month first), `March 5, 2024`, `5 Mar 2024`.
pub fn parse(value: &str) -> Option<String> {
    let value = value.trim();

    let (year, month, day): (u32, u32, u32) = if let Some(caps) = iso_regex().captures(value) {
        (caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
    } else if let Some(caps) = us_regex().captures(value) {
        (caps[3].parse().ok()?, caps[1].parse().ok()?, caps[2].parse().ok()?)
    } else if let Some(caps) = month_first_regex().captures(value) {
        (caps[3].parse().ok()?, month_number(&caps[1])?, caps[2].parse().ok()?)
    } else if let Some(caps) = day_first_regex().captures(value) {
        (caps[3].parse().ok()?, month_number(&caps[2])?, caps[1].parse().ok()?)
    } else {
        return None;
    };

    is_valid(year, month, day).then(|| format!("{year:04}-{month:02}-{day:02}"))
}

/// Full month name or any prefix of at least three letters.
fn month_number(name: &str) -> Option<u32> {
    let name = name.to_ascii_lowercase();
    if name.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|month| month.starts_with(&name))
        .map(|index| index as u32 + 1)
}

fn is_valid(year: u32, month: u32, day: u32) -> bool {
    (1..=9999).contains(&year) && (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month)
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

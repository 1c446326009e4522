//! Pure text helpers shared by both renderers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Naive tag matcher: `<`, a lazy run of non-`<` characters, `>`.
/// Nested or unbalanced brackets are not handled; `a < b > c` loses ` b `.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^<]+?>").expect("tag pattern is a valid regex"));

/// Strict ISO-8601 shape: fixed-width fields, `T` or space separator, time
/// down to the hour, optional fraction and `±HH:MM` offset. chrono alone
/// accepts 1-digit fields, leading blanks and signed years.
static ISO_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<date>\d{4}-\d{2}-\d{2})(?:(?P<sep>[T ])(?P<hour>\d{2})(?P<rest>:\d{2}(?::\d{2}(?:\.\d+)?)?)?)?(?P<offset>[+-]\d{2}:\d{2})?$",
    )
    .expect("ISO shape pattern is a valid regex")
});

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Formats an ISO-8601 date or datetime as `YYYY.MM`.
///
/// A trailing (or any) `Z` is read as `+00:00`. The month is taken from the
/// value as written, without converting to UTC. Empty input and anything
/// that does not parse are returned unchanged.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let normalized = raw.replace('Z', "+00:00");
    match parse_iso(&normalized) {
        Some(dt) => dt.format("%Y.%m").to_string(),
        None => raw.to_string(),
    }
}

fn parse_iso(s: &str) -> Option<NaiveDateTime> {
    let caps = ISO_SHAPE.captures(s)?;

    // chrono needs minutes; `2020-05-01T10` is read as `2020-05-01T10:00`.
    let expanded = match (caps.name("sep"), caps.name("hour"), caps.name("rest")) {
        (Some(sep), Some(hour), None) => format!(
            "{}{}{}:00{}",
            &caps["date"],
            sep.as_str(),
            hour.as_str(),
            caps.name("offset").map_or("", |m| m.as_str())
        ),
        _ => s.to_string(),
    };
    let s = expanded.as_str();

    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.naive_local());
    }

    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Strips tags, unescapes `&lt;`/`&gt;`, and trims.
pub fn clean_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    TAG_PATTERN
        .replace_all(text, "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .trim()
        .to_string()
}

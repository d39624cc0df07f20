use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YEARS_RE: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Extracts the first run of ASCII digits in an experience descriptor ("5+ years" → 5).
/// Other scripts' digits are skipped rather than matched.
/// Descriptors without digits, or with a number too large for `u32`, count as 0.
pub fn parse_years(descriptor: &str) -> u32 {
    YEARS_RE
        .find(descriptor)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

//! Day-count detection from free-form requests.
//!
//! Recognises an integer followed by a day unit, either the Korean `일`
//! ("5일", "10 일") or the English `day`/`days` in any case ("3 days",
//! "7Day"). The Korean form is tried first; the English form only when the
//! Korean one finds nothing. Only the first match counts.

use std::sync::OnceLock;

use regex::Regex;

/// Day count used when the request names none.
pub const DEFAULT_DAYS: u32 = 7;

/// Smallest plan length.
pub const MIN_DAYS: u32 = 1;

/// Largest plan length.
pub const MAX_DAYS: u32 = 30;

fn korean_day_regex() -> &'static Regex {
    static KOREAN_DAY_RE: OnceLock<Regex> = OnceLock::new();
    KOREAN_DAY_RE
        .get_or_init(|| Regex::new(r"([0-9]+)\s*일").expect("korean day regex must compile"))
}

fn english_day_regex() -> &'static Regex {
    static ENGLISH_DAY_RE: OnceLock<Regex> = OnceLock::new();
    ENGLISH_DAY_RE.get_or_init(|| {
        Regex::new(r"(?i)([0-9]+)\s*(?:day|days)").expect("english day regex must compile")
    })
}

/// Detect the number of plan days in `text`, falling back to
/// [`DEFAULT_DAYS`].
///
/// # Examples
///
/// ```rust
/// use studyplan_core::day_count::detect_num_days;
///
/// assert_eq!(detect_num_days("5일 동안 파이썬 공부 계획 짜줘"), 5);
/// assert_eq!(detect_num_days("a 3 day sprint"), 3);
/// assert_eq!(detect_num_days("100일 챌린지"), 30);
/// assert_eq!(detect_num_days("파이썬 공부 계획"), 7);
/// ```
pub fn detect_num_days(text: &str) -> u32 {
    detect_num_days_or(text, DEFAULT_DAYS)
}

/// Detect the number of plan days in `text`, falling back to `default`.
///
/// A match is clamped to `MIN_DAYS..=MAX_DAYS`. A digit run too long for an
/// integer is above the range by construction and clamps to [`MAX_DAYS`].
/// The fallback itself is clamped as well, so the result is always in range.
pub fn detect_num_days_or(text: &str, default: u32) -> u32 {
    let captures = korean_day_regex()
        .captures(text)
        .or_else(|| english_day_regex().captures(text));

    let Some(digits) = captures.and_then(|c| c.get(1)) else {
        return default.clamp(MIN_DAYS, MAX_DAYS);
    };

    match digits.as_str().parse::<u64>() {
        Ok(n) => n.clamp(u64::from(MIN_DAYS), u64::from(MAX_DAYS)) as u32,
        Err(_) => MAX_DAYS,
    }
}

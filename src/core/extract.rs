use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeSet;

/// Strict calendar validation; impossible combinations (Feb 30, month 13)
/// drop the candidate instead of failing the extraction.
fn safe_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let y = year.parse().ok()?;
    let m = month.parse().ok()?;
    let d = day.parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Finds every calendar date written in one of the three stamp formats:
/// `YYYY.M.D`, `YYYY년M월D일` (whitespace allowed around the unit markers),
/// and `D.M.YYYY`. Returns the validated candidates sorted ascending with
/// duplicates collapsed.
pub fn extract_dates(text: &str) -> Vec<NaiveDate> {
    if text.is_empty() {
        return Vec::new();
    }

    // OCR fragments arrive joined with line breaks; flatten to one line and
    // touch nothing else.
    let t = text.replace(['\n', '\r'], " ");

    let year_first = Regex::new(r"\b(\d{4})\.(\d{1,2})\.(\d{1,2})\b").unwrap();
    let korean = Regex::new(r"(\d{4})\s*년\s*(\d{1,2})\s*월\s*(\d{1,2})\s*일").unwrap();
    let day_first = Regex::new(r"\b(\d{1,2})\.(\d{1,2})\.(\d{4})\b").unwrap();

    let mut candidates = BTreeSet::new();

    for caps in year_first.captures_iter(&t) {
        if let Some(date) = safe_date(&caps[1], &caps[2], &caps[3]) {
            candidates.insert(date);
        }
    }

    for caps in korean.captures_iter(&t) {
        if let Some(date) = safe_date(&caps[1], &caps[2], &caps[3]) {
            candidates.insert(date);
        }
    }

    for caps in day_first.captures_iter(&t) {
        if let Some(date) = safe_date(&caps[3], &caps[2], &caps[1]) {
            candidates.insert(date);
        }
    }

    candidates.into_iter().collect()
}

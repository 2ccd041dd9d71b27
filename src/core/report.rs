use crate::core::calendar::format_stamp;
use crate::domain::model::{MatchReport, Resolution};
use chrono::NaiveDate;

/// Renders both sides as `YYYY.MM.DD` and compares them. A non-resolved
/// stamp yields `matched = false` with no resolved text; callers present
/// that as "not recognized", never as a mismatch.
pub fn report(target: NaiveDate, resolution: &Resolution) -> MatchReport {
    let target_text = format_stamp(target);
    let resolved_text = resolution.date().map(format_stamp);
    let matched = resolved_text.as_deref() == Some(target_text.as_str());

    MatchReport {
        matched,
        target_text,
        resolved_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_exact_match() {
        let r = report(d(2024, 9, 14), &Resolution::Resolved(d(2024, 9, 14)));
        assert!(r.matched);
        assert_eq!(r.target_text, "2024.09.14");
        assert_eq!(r.resolved_text.as_deref(), Some("2024.09.14"));
    }

    #[test]
    fn test_mismatch() {
        let r = report(d(2024, 9, 14), &Resolution::Resolved(d(2024, 9, 13)));
        assert!(!r.matched);
        assert_eq!(r.resolved_text.as_deref(), Some("2024.09.13"));
    }

    #[test]
    fn test_not_found_is_not_a_mismatch() {
        let r = report(d(2024, 9, 14), &Resolution::NotFound);
        assert!(!r.matched);
        assert!(r.resolved_text.is_none());
    }

    #[test]
    fn test_ambiguous_reports_absent() {
        let r = report(d(2024, 9, 14), &Resolution::Ambiguous { count: 4 });
        assert!(!r.matched);
        assert!(r.resolved_text.is_none());
    }
}

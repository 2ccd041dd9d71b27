use crate::domain::model::Resolution;
use chrono::NaiveDate;

/// Picks the single date being verified out of the extracted candidates.
/// Labels often carry both a production date and an expiry date, so two
/// candidates resolve to the later one. Three or more is treated as
/// unreliable and refused rather than guessed at.
pub fn resolve(candidates: &[NaiveDate]) -> Resolution {
    match candidates {
        [] => Resolution::NotFound,
        [only] => Resolution::Resolved(*only),
        [a, b] => Resolution::Resolved(*a.max(b)),
        many => Resolution::Ambiguous { count: many.len() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_empty_is_not_found() {
        assert_eq!(resolve(&[]), Resolution::NotFound);
    }

    #[test]
    fn test_single_candidate() {
        let only = d(2024, 9, 14);
        assert_eq!(resolve(&[only]), Resolution::Resolved(only));
    }

    #[test]
    fn test_two_candidates_pick_later() {
        let made = d(2024, 3, 15);
        let expiry = d(2024, 9, 14);
        assert_eq!(resolve(&[made, expiry]), Resolution::Resolved(expiry));
        assert_eq!(resolve(&[expiry, made]), Resolution::Resolved(expiry));
    }

    #[test]
    fn test_three_or_more_is_ambiguous() {
        let dates = [d(2024, 1, 1), d(2024, 2, 2), d(2024, 3, 3)];
        assert_eq!(resolve(&dates), Resolution::Ambiguous { count: 3 });
    }
}

use crate::domain::model::OcrFragment;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Every textual rendering a stamp of this date may have on the label, in
/// padded and unpadded forms of all three recognized formats.
fn stamp_variants(date: NaiveDate) -> BTreeSet<String> {
    let (y, m, d) = (date.year(), date.month(), date.day());
    BTreeSet::from([
        format!("{}.{:02}.{:02}", y, m, d),
        format!("{}.{}.{}", y, m, d),
        format!("{}년{:02}월{:02}일", y, m, d),
        format!("{}년{}월{}일", y, m, d),
        format!("{:02}.{:02}.{}", d, m, y),
        format!("{}.{}.{}", d, m, y),
    ])
}

/// Post-hoc lookup tying the resolved date back to the OCR fragment that
/// produced it, for highlighting in the caller's UI. Plain whitespace-blind
/// string containment; the first matching fragment wins.
pub fn find_fragment<'a>(date: NaiveDate, fragments: &'a [OcrFragment]) -> Option<&'a OcrFragment> {
    let variants = stamp_variants(date);

    fragments.iter().find(|fragment| {
        let normalized = fragment.text.replace(' ', "");
        !normalized.is_empty() && variants.iter().any(|v| normalized.contains(v.as_str()))
    })
}

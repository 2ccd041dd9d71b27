use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One unit of text recognized by the OCR collaborator. Geometry is optional;
/// sources that only deliver plain text leave it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrFragment {
    pub text: String,
    pub bounds: Option<BoundingBox>,
}

/// Axis-aligned box in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

/// Outcome of the expiry resolution policy over extracted date candidates.
/// `NotFound` and `Ambiguous` both surface as "absent" to the reporter, but
/// the distinction is kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Resolved(NaiveDate),
    NotFound,
    Ambiguous { count: usize },
}

impl Resolution {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Resolution::Resolved(d) => Some(*d),
            _ => None,
        }
    }
}

/// Final verdict of one verification run. `resolved_text` is `None` when no
/// stamp could be resolved; callers must not present that as a mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub matched: bool,
    pub target_text: String,
    pub resolved_text: Option<String>,
}

/// Everything one run produces. Recomputed fresh on every call, never cached.
#[derive(Debug, Clone)]
pub struct VerificationOutcome {
    pub target: NaiveDate,
    pub resolution: Resolution,
    pub report: MatchReport,
    pub fragment: Option<OcrFragment>,
}

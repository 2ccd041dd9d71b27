pub mod calendar;
pub mod extract;
pub mod locate;
pub mod report;
pub mod resolve;
pub mod verifier;

pub use crate::domain::model::{
    BoundingBox, MatchReport, OcrFragment, Resolution, VerificationOutcome,
};
pub use crate::domain::ports::{Catalog, OcrSource};
pub use crate::utils::error::Result;

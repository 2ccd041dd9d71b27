use crate::core::{calendar, extract, locate, report, resolve};
use crate::domain::model::{Resolution, VerificationOutcome};
use crate::domain::ports::OcrSource;
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Runs one full verification: target date from the shelf-life arithmetic,
/// recognized text from the OCR port, then extract / resolve / report.
/// Holds no state between runs.
pub struct Verifier<O: OcrSource> {
    ocr: O,
}

impl<O: OcrSource> Verifier<O> {
    pub fn new(ocr: O) -> Self {
        Self { ocr }
    }

    pub async fn run(
        &self,
        made_on: NaiveDate,
        shelf_life_months: u32,
        image: &[u8],
    ) -> Result<VerificationOutcome> {
        let target = calendar::target_date(made_on, shelf_life_months);
        tracing::info!("Target stamp: {}", calendar::format_stamp(target));

        let fragments = self.ocr.recognize(image).await?;
        tracing::debug!("OCR returned {} fragments", fragments.len());

        let full_text = fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let candidates = extract::extract_dates(&full_text);
        tracing::debug!("Extracted {} date candidates", candidates.len());

        let resolution = resolve::resolve(&candidates);
        match resolution {
            Resolution::Resolved(date) => {
                tracing::info!("Resolved stamp: {}", calendar::format_stamp(date));
            }
            Resolution::NotFound => {
                tracing::warn!("No date found in recognized text");
            }
            Resolution::Ambiguous { count } => {
                tracing::warn!("{} dates found, refusing to pick one", count);
            }
        }

        let report = report::report(target, &resolution);
        let fragment = resolution
            .date()
            .and_then(|date| locate::find_fragment(date, &fragments))
            .cloned();

        Ok(VerificationOutcome {
            target,
            resolution,
            report,
            fragment,
        })
    }
}

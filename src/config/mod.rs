pub mod catalog;

use crate::utils::error::{Result, StampError};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "stamp-check")]
#[command(about = "Verifies a printed date stamp against a computed shelf-life target")]
pub struct CliConfig {
    #[arg(long, help = "Product name, exact match against the catalog")]
    pub product: String,

    #[arg(long, help = "Manufacturing date, YYYY.MM.DD")]
    pub made_on: String,

    #[arg(long, default_value = "products.toml")]
    pub catalog: String,

    #[arg(long, help = "Label photograph to send to the OCR service")]
    pub image: Option<String>,

    #[arg(long, help = "OCR service endpoint, required with --image")]
    pub ocr_endpoint: Option<String>,

    #[arg(long, help = "Already-recognized text dump, bypasses the OCR service")]
    pub ocr_text: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn manufacture_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.made_on, "%Y.%m.%d").map_err(|e| {
            StampError::InvalidConfigValueError {
                field: "made_on".to_string(),
                value: self.made_on.clone(),
                reason: format!("Expected YYYY.MM.DD: {}", e),
            }
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("product", &self.product)?;
        validation::validate_non_empty_string("catalog", &self.catalog)?;
        self.manufacture_date()?;

        match (&self.image, &self.ocr_text) {
            (Some(_), Some(_)) => Err(StampError::InvalidConfigValueError {
                field: "image".to_string(),
                value: self.image.clone().unwrap_or_default(),
                reason: "--image and --ocr-text are mutually exclusive".to_string(),
            }),
            (None, None) => Err(StampError::MissingConfigError {
                field: "image or ocr_text".to_string(),
            }),
            (Some(_), None) => {
                let endpoint =
                    validation::validate_required_field("ocr_endpoint", &self.ocr_endpoint)?;
                validation::validate_url("ocr_endpoint", endpoint)
            }
            (None, Some(_)) => Ok(()),
        }
    }
}

use crate::domain::model::OcrFragment;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The OCR engine is a black box behind this port: bytes in, located text
/// fragments out.
#[async_trait]
pub trait OcrSource: Send + Sync {
    async fn recognize(&self, image: &[u8]) -> Result<Vec<OcrFragment>>;
}

/// Read-only shelf-life reference data, name -> months.
pub trait Catalog: Send + Sync {
    /// Exact-name lookup.
    fn shelf_life_months(&self, name: &str) -> Option<u32>;

    /// Substring matches, used for "did you mean" hints on a failed lookup.
    fn matching(&self, input: &str) -> Vec<String>;
}

use crate::domain::model::{BoundingBox, OcrFragment};
use crate::domain::ports::OcrSource;
use crate::utils::error::{Result, StampError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::path::PathBuf;

/// Wire shape of the OCR service response: one entry per recognized fragment,
/// with the quad vertices in pixel coordinates.
#[derive(Debug, Deserialize)]
struct WireFragment {
    text: String,
    #[serde(default)]
    vertices: Vec<[i32; 2]>,
}

fn bounds_from_vertices(vertices: &[[i32; 2]]) -> Option<BoundingBox> {
    if vertices.is_empty() {
        return None;
    }

    let min_x = vertices.iter().map(|v| v[0]).min()?;
    let max_x = vertices.iter().map(|v| v[0]).max()?;
    let min_y = vertices.iter().map(|v| v[1]).min()?;
    let max_y = vertices.iter().map(|v| v[1]).max()?;

    Some(BoundingBox {
        min_x,
        min_y,
        max_x,
        max_y,
    })
}

/// OCR engine behind an HTTP endpoint: image bytes in the request body,
/// JSON fragment array back.
pub struct HttpOcrSource {
    client: Client,
    endpoint: String,
}

impl HttpOcrSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl OcrSource for HttpOcrSource {
    async fn recognize(&self, image: &[u8]) -> Result<Vec<OcrFragment>> {
        tracing::debug!("Posting {} bytes to OCR service: {}", image.len(), self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await?;

        tracing::debug!("OCR response status: {}", response.status());
        if !response.status().is_success() {
            return Err(StampError::OcrServiceError {
                message: format!("Unexpected status: {}", response.status()),
            });
        }

        let wire: Vec<WireFragment> = response.json().await?;
        Ok(wire
            .into_iter()
            .map(|w| OcrFragment {
                bounds: bounds_from_vertices(&w.vertices),
                text: w.text,
            })
            .collect())
    }
}

/// Text-dump source for runs without an OCR service: reads already-recognized
/// text from a file and hands it over as a single fragment with no geometry.
pub struct PlainTextSource {
    path: PathBuf,
}

impl PlainTextSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl OcrSource for PlainTextSource {
    async fn recognize(&self, _image: &[u8]) -> Result<Vec<OcrFragment>> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        Ok(vec![OcrFragment { text, bounds: None }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_vertices() {
        let quad = [[10, 20], [120, 20], [120, 48], [10, 48]];
        assert_eq!(
            bounds_from_vertices(&quad),
            Some(BoundingBox {
                min_x: 10,
                min_y: 20,
                max_x: 120,
                max_y: 48,
            })
        );
        assert_eq!(bounds_from_vertices(&[]), None);
    }
}

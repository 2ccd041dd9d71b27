use thiserror::Error;

#[derive(Error, Debug)]
pub enum StampError {
    #[error("OCR request failed: {0}")]
    OcrRequestError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog parse error: {0}")]
    CatalogParseError(#[from] toml::de::Error),

    #[error("OCR service error: {message}")]
    OcrServiceError { message: String },

    #[error("Unknown product: {name}")]
    UnknownProductError { name: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, StampError>;

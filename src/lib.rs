pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::ocr::{HttpOcrSource, PlainTextSource};
pub use config::{catalog::ShelfLifeCatalog, CliConfig};
pub use core::verifier::Verifier;
pub use utils::error::{Result, StampError};

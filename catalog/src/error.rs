//! FILENAME: catalog/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog endpoint returned status {0}")]
    BadStatus(u16),

    #[error("Catalog decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog is empty")]
    Empty,
}

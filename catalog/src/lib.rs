//! FILENAME: catalog/src/lib.rs
//! PURPOSE: Acquisition of the external product catalog.
//! CONTEXT: The catalog is a static JSON array of product records, loaded
//! exactly once per session (over HTTP or from a local file) and then
//! handed to the engine as an immutable snapshot. This is the only fallible
//! boundary in the system; the calculation core itself never errors.

pub mod error;

pub use error::CatalogError;

use engine::{Catalog, Product};
use std::path::Path;

/// Decodes a catalog from its JSON wire form: an array of product records
/// with camelCase keys. Unknown keys are ignored; missing numeric fields
/// decode to absent. An empty array is rejected — a session without any
/// product to reference cannot compute anything meaningful.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    if products.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(Catalog::from_products(products))
}

/// Loads the catalog from a local JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let json = std::fs::read_to_string(path)?;
    parse_catalog(&json)
}

/// Fetches the catalog from an HTTP endpoint. One-shot: called a single
/// time at session start, before any row can resolve a product.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::BadStatus(status.as_u16()));
    }
    let body = response.text().await?;
    parse_catalog(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"name": "Copper", "minRate": 0.5, "maxRate": 2.0, "eiqPerHa": 33.2},
        {"name": "Sulfur", "maxRate": 8.0, "eiqPerHa": 130.0},
        {"name": "Unrated"}
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);

        let copper = catalog.get("Copper").unwrap();
        assert_eq!(copper.max_rate, Some(2.0));
        assert_eq!(copper.eiq_per_ha, Some(33.2));

        let unrated = catalog.get("Unrated").unwrap();
        assert_eq!(unrated.baseline_rate(), 0.0);
        assert_eq!(unrated.base_eiq(), 0.0);
    }

    #[test]
    fn test_parse_catalog_ignores_unknown_keys() {
        let json = r#"[{"name": "X", "maxRate": 1.0, "vendor": "Acme", "notes": null}]"#;
        let catalog = parse_catalog(json).unwrap();
        assert_eq!(catalog.get("X").unwrap().max_rate, Some(1.0));
    }

    #[test]
    fn test_parse_catalog_rejects_empty() {
        assert!(matches!(parse_catalog("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_parse_catalog_rejects_malformed() {
        assert!(matches!(
            parse_catalog("{\"not\": \"an array\"}"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_catalog_unreachable_endpoint() {
        // Nothing listens on port 1; the fetch must surface the transport
        // error instead of panicking.
        let result = fetch_catalog("http://127.0.0.1:1/catalog.json").await;
        assert!(matches!(result, Err(CatalogError::Http(_))));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}

//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for EIQ calculator integration tests.

use app_lib::Session;
use engine::{Catalog, Product};

/// Catalog JSON in the external wire format, used by scenario-file tests.
pub const CATALOG_JSON: &str = r#"[
    {"name": "Copper", "minRate": 0.5, "maxRate": 2.0, "eiqPerHa": 33.25},
    {"name": "Sulfur", "minRate": 2.0, "maxRate": 8.0, "eiqPerHa": 130.0},
    {"name": "Spinosad", "maxRate": 0.3, "eiqPerHa": 11.4},
    {"name": "Unrated"}
]"#;

/// The same catalog as ready-made products.
pub fn sample_catalog() -> Catalog {
    let mut copper = Product::new("Copper");
    copper.min_rate = Some(0.5);
    copper.max_rate = Some(2.0);
    copper.eiq_per_ha = Some(33.25);

    let mut sulfur = Product::new("Sulfur");
    sulfur.min_rate = Some(2.0);
    sulfur.max_rate = Some(8.0);
    sulfur.eiq_per_ha = Some(130.0);

    let mut spinosad = Product::new("Spinosad");
    spinosad.max_rate = Some(0.3);
    spinosad.eiq_per_ha = Some(11.4);

    let unrated = Product::new("Unrated");

    Catalog::from_products(vec![copper, sulfur, spinosad, unrated])
}

/// A session over the sample catalog with no rows yet.
pub fn sample_session() -> Session {
    Session::new(sample_catalog())
}

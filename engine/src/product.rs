//! FILENAME: engine/src/product.rs
//! PURPOSE: Defines the product reference data and the session catalog.
//! CONTEXT: Products arrive as an external JSON snapshot once per session.
//! The `Catalog` wraps them in an immutable name-keyed lookup; the calculation
//! core only ever reads from it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single agrochemical product from the external catalog.
///
/// All numeric fields are optional in the wire format; an absent field is
/// treated as zero wherever arithmetic needs a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product name, the lookup key for rows.
    pub name: String,

    /// Minimum application rate (unit per hectare).
    #[serde(default)]
    pub min_rate: Option<f64>,

    /// Maximum application rate (unit per hectare). This is the baseline
    /// ("normal") rate when a row carries no override.
    #[serde(default)]
    pub max_rate: Option<f64>,

    /// Baseline EIQ contribution per hectare at the product's reference rate.
    #[serde(default)]
    pub eiq_per_ha: Option<f64>,
}

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Product {
            name: name.into(),
            min_rate: None,
            max_rate: None,
            eiq_per_ha: None,
        }
    }

    /// The baseline application rate: max rate if set and non-zero,
    /// falling back to min rate, then to zero.
    pub fn baseline_rate(&self) -> f64 {
        first_nonzero(&[self.max_rate, self.min_rate])
    }

    /// The base EIQ per hectare, zero when absent.
    pub fn base_eiq(&self) -> f64 {
        self.eiq_per_ha.unwrap_or(0.0)
    }
}

/// Picks the first entry that is present and non-zero. Zero counts as absent,
/// matching the catalog's convention that an unset rate is written as 0.
pub(crate) fn first_nonzero(candidates: &[Option<f64>]) -> f64 {
    for candidate in candidates {
        if let Some(v) = candidate {
            if *v != 0.0 {
                return *v;
            }
        }
    }
    0.0
}

// ============================================================================
// CATALOG
// ============================================================================

/// Immutable product lookup for one session.
///
/// Built once after the external load completes. Preserves the input order
/// for listings; lookups are exact name matches. The first occurrence of a
/// duplicated name wins.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    by_name: HashMap<String, Product>,
    order: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from an ordered product sequence.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut by_name = HashMap::with_capacity(products.len());
        let mut order = Vec::with_capacity(products.len());

        for product in products {
            if by_name.contains_key(&product.name) {
                continue;
            }
            order.push(product.name.clone());
            by_name.insert(product.name.clone(), product);
        }

        Catalog { by_name, order }
    }

    /// Resolves a product by exact name match.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.by_name.get(name)
    }

    /// Product names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Products in catalog order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.order.iter().filter_map(|name| self.by_name.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

//! FILENAME: engine/src/row.rs
//! PURPOSE: Defines the user-editable application row.
//! CONTEXT: One row per application event. Rows carry only the base fields
//! the user edits; every derived figure lives in `calc::ComputedRow` and is
//! recomputed on each read, never stored here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, stable identifier for a row.
///
/// Assigned when the row is added and never reused, so that update/removal
/// addresses rows unambiguously regardless of reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId(Uuid);

impl RowId {
    pub fn new() -> Self {
        RowId(Uuid::new_v4())
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for RowId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RowId(Uuid::parse_str(s)?))
    }
}

/// One product application entry, as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRow {
    /// Stable identifier, created at row-add time.
    pub id: RowId,

    /// Product reference by catalog name. Blank or unresolved names are
    /// valid and mean "no product".
    pub product: Option<String>,

    /// Repetition count. No lower bound is enforced.
    pub times: i32,

    /// Optional override of the baseline rate. A zero override behaves like
    /// no override: the product fallback chain applies.
    pub normal_rate: Option<f64>,

    /// Percentage applied to the normal rate to obtain the scenario rate.
    /// No upper clamp.
    pub scenario_pct: f64,

    /// Percentage of the field area treated; scales the product EIQ.
    pub field_pct: f64,
}

impl ApplicationRow {
    /// Creates a row with default values and a fresh id.
    pub fn new() -> Self {
        ApplicationRow {
            id: RowId::new(),
            product: None,
            times: 1,
            normal_rate: None,
            scenario_pct: 100.0,
            field_pct: 100.0,
        }
    }

    /// Creates a defaulted row referencing the given product.
    pub fn for_product(name: impl Into<String>) -> Self {
        let mut row = ApplicationRow::new();
        row.product = Some(name.into());
        row
    }

    /// The product name, with blank strings normalized to none.
    pub fn product_name(&self) -> Option<&str> {
        match self.product.as_deref() {
            Some(name) if !name.trim().is_empty() => Some(name),
            _ => None,
        }
    }
}

impl Default for ApplicationRow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_defaults() {
        let row = ApplicationRow::new();
        assert_eq!(row.product, None);
        assert_eq!(row.times, 1);
        assert_eq!(row.normal_rate, None);
        assert_eq!(row.scenario_pct, 100.0);
        assert_eq!(row.field_pct, 100.0);
    }

    #[test]
    fn test_row_ids_are_unique() {
        let a = ApplicationRow::new();
        let b = ApplicationRow::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_blank_product_name_is_none() {
        let mut row = ApplicationRow::new();
        row.product = Some("   ".to_string());
        assert_eq!(row.product_name(), None);

        row.product = Some("Copper".to_string());
        assert_eq!(row.product_name(), Some("Copper"));
    }

    #[test]
    fn test_row_id_round_trips_through_display() {
        let id = RowId::new();
        let parsed: RowId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}

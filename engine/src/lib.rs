//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the EIQ calculation engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod calc;
pub mod number_format;
pub mod product;
pub mod row;
pub mod tier;

// Re-export commonly used types at the crate root
pub use calc::{compute_row, compute_totals, ComputedRow, Totals};
pub use number_format::{format_change_pct, format_decimal, format_decimal_grouped, format_general};
pub use product::{Catalog, Product};
pub use row::{ApplicationRow, RowId};
pub use tier::Tier;

//! FILENAME: engine/src/calc.rs
//! PURPOSE: The calculation core — per-row EIQ cascade and aggregate totals.
//! CONTEXT: Pure, stateless arithmetic. Every operation here is total: no
//! input can make it fail, and every output is a finite number. Division is
//! guarded; absent values coerce to zero. Callers recompute on every read,
//! so nothing in this module caches.

use serde::{Deserialize, Serialize};

use crate::product::{first_nonzero, Catalog};
use crate::row::{ApplicationRow, RowId};

// ============================================================================
// COMPUTED ROW
// ============================================================================

/// The derived figures for one application row, plus the echo of the base
/// fields the report surface needs. Produced by [`compute_row`]; never
/// authoritative state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedRow {
    pub id: RowId,

    /// The product name as entered (blank normalized to none). May be an
    /// unresolved reference; that is a defined state, not an error.
    pub product: Option<String>,

    pub times: i32,
    pub scenario_pct: f64,
    pub field_pct: f64,

    /// Effective baseline rate after the override/product fallback chain.
    pub normal_rate: f64,

    /// `normal_rate` scaled by the scenario percentage.
    pub scenario_rate: f64,

    /// Base EIQ scaled by the scenario-to-normal rate ratio.
    pub dose_eiq_ha: f64,

    /// Dose EIQ multiplied by the repetition count.
    pub product_eiq_ha: f64,

    /// Product EIQ scaled by the treated field percentage.
    pub field_eiq_ha: f64,

    /// The unscaled baseline (base EIQ times repetitions), independent of
    /// the scenario and field percentages.
    pub default_eiq_ha: f64,
}

/// Resolves a row against the catalog and derives all per-row figures.
///
/// The cascade:
/// 1. normal rate = first non-zero of (row override, product max rate,
///    product min rate), else 0
/// 2. scenario rate = normal rate x scenario% / 100
/// 3. dose EIQ/ha = base EIQ x (scenario rate / normal rate), 0 when the
///    normal rate is not positive
/// 4. product EIQ/ha = dose EIQ/ha x times
/// 5. field EIQ/ha = product EIQ/ha x field% / 100
/// 6. default EIQ/ha = base EIQ x times
///
/// The dose is computed via the rate ratio rather than directly from the
/// scenario percentage: the two agree when the normal rate comes from the
/// catalog, but the ratio form rescales relative to a user override.
pub fn compute_row(catalog: &Catalog, row: &ApplicationRow) -> ComputedRow {
    let product = row.product_name().and_then(|name| catalog.get(name));

    let product_rate = product.map(|p| p.baseline_rate()).unwrap_or(0.0);
    let base_eiq = product.map(|p| p.base_eiq()).unwrap_or(0.0);

    let normal_rate = first_nonzero(&[row.normal_rate, Some(product_rate)]);
    let scenario_rate = normal_rate * row.scenario_pct / 100.0;

    let dose_eiq_ha = if normal_rate > 0.0 {
        base_eiq * (scenario_rate / normal_rate)
    } else {
        0.0
    };

    let times = row.times as f64;
    let product_eiq_ha = dose_eiq_ha * times;
    let field_eiq_ha = product_eiq_ha * row.field_pct / 100.0;
    let default_eiq_ha = base_eiq * times;

    ComputedRow {
        id: row.id,
        product: row.product_name().map(str::to_string),
        times: row.times,
        scenario_pct: row.scenario_pct,
        field_pct: row.field_pct,
        normal_rate,
        scenario_rate,
        dose_eiq_ha,
        product_eiq_ha,
        field_eiq_ha,
        default_eiq_ha,
    }
}

// ============================================================================
// AGGREGATE TOTALS
// ============================================================================

/// Aggregates over the full set of computed rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of the rows' default EIQ/ha: the "normal" baseline load.
    pub normal_total: f64,

    /// Sum of the rows' field EIQ/ha: the adjusted scenario load.
    pub scenario_total: f64,

    /// Relative change of the scenario against the baseline. A zero
    /// baseline is reported as zero change, never as infinity.
    pub change: f64,
}

/// Sums the computed rows into baseline and scenario totals.
pub fn compute_totals(rows: &[ComputedRow]) -> Totals {
    let normal_total: f64 = rows.iter().map(|r| r.default_eiq_ha).sum();
    let scenario_total: f64 = rows.iter().map(|r| r.field_eiq_ha).sum();

    let change = if normal_total > 0.0 {
        scenario_total / normal_total - 1.0
    } else {
        0.0
    };

    Totals {
        normal_total,
        scenario_total,
        change,
    }
}

//! FILENAME: app/src/session.rs
//! PURPOSE: The single logical owner of the row list.
//! CONTEXT: Holds the immutable catalog snapshot and the ordered rows, and
//! mutates them serially. Derived figures are recomputed from scratch on
//! every read — the session never stores a computed result, so there is no
//! stale state to invalidate.

use engine::{compute_row, compute_totals, ApplicationRow, Catalog, ComputedRow, RowId, Tier, Totals};

use crate::{log_debug, log_info};

/// A partial edit to one row. `None` leaves a field untouched; for the two
/// optional base fields the inner option distinguishes "set" from "clear".
#[derive(Debug, Clone, Default)]
pub struct RowUpdate {
    pub product: Option<Option<String>>,
    pub times: Option<i32>,
    pub normal_rate: Option<Option<f64>>,
    pub scenario_pct: Option<f64>,
    pub field_pct: Option<f64>,
}

/// One calculation session: catalog snapshot plus the editable row list.
pub struct Session {
    catalog: Catalog,
    rows: Vec<ApplicationRow>,
}

impl Session {
    /// Starts a session over a loaded catalog with no rows.
    pub fn new(catalog: Catalog) -> Self {
        Session {
            catalog,
            rows: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rows(&self) -> &[ApplicationRow] {
        &self.rows
    }

    /// Appends a defaulted row and returns its id.
    pub fn add_row(&mut self) -> RowId {
        let row = ApplicationRow::new();
        let id = row.id;
        self.rows.push(row);
        log_debug!("SESSION", "add_row id={}", id);
        id
    }

    /// Appends a pre-built row (scenario file load), returning its id.
    pub fn insert_row(&mut self, row: ApplicationRow) -> RowId {
        let id = row.id;
        self.rows.push(row);
        id
    }

    /// Applies a partial edit to the addressed row.
    pub fn update_row(&mut self, id: RowId, update: RowUpdate) -> Result<(), String> {
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| format!("No row with id {}", id))?;

        if let Some(product) = update.product {
            row.product = product;
        }
        if let Some(times) = update.times {
            row.times = times;
        }
        if let Some(normal_rate) = update.normal_rate {
            row.normal_rate = normal_rate;
        }
        if let Some(scenario_pct) = update.scenario_pct {
            row.scenario_pct = scenario_pct;
        }
        if let Some(field_pct) = update.field_pct {
            row.field_pct = field_pct;
        }

        log_debug!("SESSION", "update_row id={}", id);
        Ok(())
    }

    /// Removes the addressed row. Permanent; there is no undo.
    pub fn remove_row(&mut self, id: RowId) -> Result<(), String> {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        if self.rows.len() == before {
            return Err(format!("No row with id {}", id));
        }
        log_info!("SESSION", "remove_row id={}", id);
        Ok(())
    }

    /// All rows resolved and computed, in row order.
    pub fn computed_rows(&self) -> Vec<ComputedRow> {
        self.rows
            .iter()
            .map(|row| compute_row(&self.catalog, row))
            .collect()
    }

    /// Aggregate totals over the current rows.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.computed_rows())
    }

    /// Tier classification of the current scenario total.
    pub fn tier(&self) -> Option<Tier> {
        Tier::classify(self.totals().scenario_total)
    }
}

//! FILENAME: app/src/scenario.rs
//! PURPOSE: Loads a scenario input file into application rows.
//! CONTEXT: The scenario file is JSON with camelCase keys, mirroring the
//! catalog wire format. Every field of a row entry is optional; omissions
//! take the row defaults. Row ids are assigned at load time, not read from
//! the file — ids are session-scoped.

use std::path::Path;

use serde::Deserialize;

use engine::ApplicationRow;

/// One row entry as it appears in the scenario file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RowSpec {
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub times: Option<i32>,
    #[serde(default)]
    pub normal_rate: Option<f64>,
    #[serde(default)]
    pub scenario_pct: Option<f64>,
    #[serde(default)]
    pub field_pct: Option<f64>,
}

impl RowSpec {
    /// Builds a row with a fresh id, falling back to defaults for
    /// omitted fields.
    pub fn into_row(self) -> ApplicationRow {
        let mut row = ApplicationRow::new();
        row.product = self.product;
        if let Some(times) = self.times {
            row.times = times;
        }
        row.normal_rate = self.normal_rate;
        if let Some(scenario_pct) = self.scenario_pct {
            row.scenario_pct = scenario_pct;
        }
        if let Some(field_pct) = self.field_pct {
            row.field_pct = field_pct;
        }
        row
    }
}

/// The scenario file root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub rows: Vec<RowSpec>,
}

/// Reads and decodes a scenario file into ready-to-insert rows.
pub fn load_scenario(path: &Path) -> Result<Vec<ApplicationRow>, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read scenario file {:?}: {}", path, e))?;
    let file: ScenarioFile = serde_json::from_str(&json)
        .map_err(|e| format!("Failed to decode scenario file {:?}: {}", path, e))?;
    Ok(file.rows.into_iter().map(RowSpec::into_row).collect())
}

//! FILENAME: report/src/xlsx.rs
//! PURPOSE: Writes the scenario report as an .xlsx workbook.
//! CONTEXT: Same table as the text report, with a bold header row, fixed
//! number formats per column, the four summary lines, and a generated-on
//! timestamp. Layout only; all figures arrive precomputed from the engine.

use chrono::Local;
use engine::{ComputedRow, Tier, Totals};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

use crate::error::ReportError;
use crate::text::PLACEHOLDER;

const HEADERS: [&str; 11] = [
    "#",
    "Product",
    "Times",
    "Normal rate",
    "Scenario %",
    "Scenario rate",
    "Field %",
    "Dose EIQ/ha",
    "Product EIQ/ha",
    "Field EIQ/ha",
    "Default EIQ/ha",
];

pub fn save_xlsx(
    path: &Path,
    rows: &[ComputedRow],
    totals: &Totals,
    tier: Option<Tier>,
) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("EIQ scenario")?;

    let bold = Format::new().set_bold();
    let rate_format = Format::new().set_num_format("0.000");
    let eiq_format = Format::new().set_num_format("0.00");
    let pct_format = Format::new().set_num_format("0.0%");

    // Header row
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }
    worksheet.set_column_width(1, 28.0)?;

    // One line per application row
    for (index, row) in rows.iter().enumerate() {
        let excel_row = index as u32 + 1;
        worksheet.write_number(excel_row, 0, (index + 1) as f64)?;
        worksheet.write_string(excel_row, 1, row.product.as_deref().unwrap_or(PLACEHOLDER))?;
        worksheet.write_number(excel_row, 2, row.times as f64)?;
        worksheet.write_number(excel_row, 3, row.normal_rate)?;
        worksheet.write_number(excel_row, 4, row.scenario_pct)?;
        worksheet.write_number_with_format(excel_row, 5, row.scenario_rate, &rate_format)?;
        worksheet.write_number(excel_row, 6, row.field_pct)?;
        worksheet.write_number_with_format(excel_row, 7, row.dose_eiq_ha, &eiq_format)?;
        worksheet.write_number_with_format(excel_row, 8, row.product_eiq_ha, &eiq_format)?;
        worksheet.write_number_with_format(excel_row, 9, row.field_eiq_ha, &eiq_format)?;
        worksheet.write_number_with_format(excel_row, 10, row.default_eiq_ha, &eiq_format)?;
    }

    // Summary block, one blank line below the table
    let mut summary_row = rows.len() as u32 + 2;
    worksheet.write_string_with_format(summary_row, 0, "Normal total EIQ/ha", &bold)?;
    worksheet.write_number_with_format(summary_row, 1, totals.normal_total, &eiq_format)?;
    summary_row += 1;
    worksheet.write_string_with_format(summary_row, 0, "Scenario total EIQ/ha", &bold)?;
    worksheet.write_number_with_format(summary_row, 1, totals.scenario_total, &eiq_format)?;
    summary_row += 1;
    worksheet.write_string_with_format(summary_row, 0, "Change", &bold)?;
    worksheet.write_number_with_format(summary_row, 1, totals.change, &pct_format)?;
    summary_row += 1;
    worksheet.write_string_with_format(summary_row, 0, "Tier", &bold)?;
    worksheet.write_string(
        summary_row,
        1,
        tier.map(|t| t.label()).unwrap_or(PLACEHOLDER),
    )?;

    summary_row += 2;
    worksheet.write_string(
        summary_row,
        0,
        &format!("Generated {}", Local::now().format("%Y-%m-%d %H:%M")),
    )?;

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{compute_row, compute_totals, ApplicationRow, Catalog, Product};

    #[test]
    fn test_save_xlsx_writes_file() {
        let mut product = Product::new("Copper");
        product.max_rate = Some(2.0);
        product.eiq_per_ha = Some(33.25);
        let catalog = Catalog::from_products(vec![product]);

        let rows = vec![
            compute_row(&catalog, &ApplicationRow::for_product("Copper")),
            compute_row(&catalog, &ApplicationRow::new()),
        ];
        let totals = compute_totals(&rows);
        let tier = Tier::classify(totals.scenario_total);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.xlsx");
        save_xlsx(&path, &rows, &totals, tier).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_save_xlsx_empty_session() {
        let totals = compute_totals(&[]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        save_xlsx(&path, &[], &totals, None).unwrap();

        assert!(path.exists());
    }
}

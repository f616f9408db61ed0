//! FILENAME: report/src/text.rs
//! PURPOSE: Plain-text rendering of the scenario report.
//! CONTEXT: One line per application row plus the four summary lines.
//! Numeric columns follow the fixed precisions of the printable report:
//! 3 decimals for the scenario rate, 2 for the EIQ figures, 1 for the
//! percentage change.

use engine::{format_change_pct, format_decimal, format_decimal_grouped, format_general};
use engine::{ComputedRow, Tier, Totals};

/// Glyph used where a value carries nothing to show (no product, no tier).
pub const PLACEHOLDER: &str = "—";

const NUMERIC_HEADERS: [&str; 9] = [
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

/// Renders the full report as a fixed-width text table.
pub fn render_text(rows: &[ComputedRow], totals: &Totals, tier: Option<Tier>) -> String {
    let mut out = String::new();

    // Product column width adapts to the longest name.
    let product_width = rows
        .iter()
        .map(|r| r.product.as_deref().unwrap_or(PLACEHOLDER).chars().count())
        .chain(std::iter::once("Product".len()))
        .max()
        .unwrap_or(7);

    out.push_str(&format!("{:>3}  {:<width$}", "#", "Product", width = product_width));
    for header in NUMERIC_HEADERS {
        out.push_str(&format!("  {:>14}", header));
    }
    out.push('\n');

    for (index, row) in rows.iter().enumerate() {
        let product = row.product.as_deref().unwrap_or(PLACEHOLDER);
        out.push_str(&format!(
            "{:>3}  {:<width$}",
            index + 1,
            product,
            width = product_width
        ));

        let cells = [
            format_general(row.times as f64),
            format_general(row.normal_rate),
            format_general(row.scenario_pct),
            format_decimal(row.scenario_rate, 3),
            format_general(row.field_pct),
            format_decimal(row.dose_eiq_ha, 2),
            format_decimal(row.product_eiq_ha, 2),
            format_decimal(row.field_eiq_ha, 2),
            format_decimal(row.default_eiq_ha, 2),
        ];
        for cell in cells {
            out.push_str(&format!("  {:>14}", cell));
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!(
        "Normal total EIQ/ha:   {}\n",
        format_decimal_grouped(totals.normal_total, 2)
    ));
    out.push_str(&format!(
        "Scenario total EIQ/ha: {}\n",
        format_decimal_grouped(totals.scenario_total, 2)
    ));
    out.push_str(&format!("Change:                {}\n", format_change_pct(totals.change)));
    out.push_str(&format!(
        "Tier:                  {}\n",
        tier.map(|t| t.label().to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{compute_row, compute_totals, ApplicationRow, Catalog, Product};

    fn sample() -> (Vec<ComputedRow>, Totals) {
        let mut product = Product::new("Copper");
        product.max_rate = Some(10.0);
        product.eiq_per_ha = Some(20.0);
        let catalog = Catalog::from_products(vec![product]);

        let mut row = ApplicationRow::for_product("Copper");
        row.times = 2;
        row.scenario_pct = 50.0;

        let rows = vec![compute_row(&catalog, &row)];
        let totals = compute_totals(&rows);
        (rows, totals)
    }

    #[test]
    fn test_render_includes_fixed_precision_columns() {
        let (rows, totals) = sample();
        let tier = Tier::classify(totals.scenario_total);
        let text = render_text(&rows, &totals, tier);

        // Scenario rate at 3 decimals, EIQ figures at 2.
        assert!(text.contains("5.000"));
        assert!(text.contains("10.00"));
        assert!(text.contains("20.00"));
        assert!(text.contains("40.00"));
    }

    #[test]
    fn test_render_summary_lines() {
        let (rows, totals) = sample();
        let tier = Tier::classify(totals.scenario_total);
        let text = render_text(&rows, &totals, tier);

        assert!(text.contains("Normal total EIQ/ha:   40.00"));
        assert!(text.contains("Scenario total EIQ/ha: 20.00"));
        assert!(text.contains("Change:                -50.0%"));
        assert!(text.contains("Tier:                  Expert"));
    }

    #[test]
    fn test_render_empty_session_uses_placeholders() {
        let totals = compute_totals(&[]);
        let text = render_text(&[], &totals, Tier::classify(totals.scenario_total));

        assert!(text.contains("Change:                0.0%"));
        assert!(text.contains(&format!("Tier:                  {}", PLACEHOLDER)));
    }

    #[test]
    fn test_render_row_without_product_uses_placeholder() {
        let catalog = Catalog::default();
        let rows = vec![compute_row(&catalog, &ApplicationRow::new())];
        let totals = compute_totals(&rows);
        let text = render_text(&rows, &totals, None);

        let first_data_line = text.lines().nth(1).unwrap();
        assert!(first_data_line.contains(PLACEHOLDER));
    }
}

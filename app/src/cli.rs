//! FILENAME: app/src/cli.rs
//! PURPOSE: Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// EIQ scenario calculator: computes the Environmental Impact Quotient load
/// of a list of product applications and prints the comparison report.
#[derive(Debug, Parser)]
#[command(name = "eiq", version)]
pub struct Cli {
    /// Product catalog source: an http(s) URL or a local JSON file.
    #[arg(long)]
    pub catalog: String,

    /// Scenario file with the application rows. Omit for an empty session.
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Also write the report as an .xlsx workbook at this path.
    #[arg(long)]
    pub xlsx: Option<PathBuf>,

    /// Mirror log lines into this file (truncated on start).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Whether the catalog argument addresses an HTTP endpoint.
    pub fn catalog_is_url(&self) -> bool {
        self.catalog.starts_with("http://") || self.catalog.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::parse_from(["eiq", "--catalog", "products.json"]);
        assert!(!cli.catalog_is_url());
        assert!(cli.scenario.is_none());
        assert!(cli.xlsx.is_none());
    }

    #[test]
    fn test_parse_full() {
        let cli = Cli::parse_from([
            "eiq",
            "--catalog",
            "https://example.org/products.json",
            "--scenario",
            "rows.json",
            "--xlsx",
            "out.xlsx",
            "--log-file",
            "run.log",
        ]);
        assert!(cli.catalog_is_url());
        assert_eq!(cli.scenario.as_deref(), Some(std::path::Path::new("rows.json")));
        assert_eq!(cli.xlsx.as_deref(), Some(std::path::Path::new("out.xlsx")));
    }

    #[test]
    fn test_catalog_is_required() {
        assert!(Cli::try_parse_from(["eiq"]).is_err());
    }
}

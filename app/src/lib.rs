//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point for the EIQ scenario calculator CLI.
// CONTEXT: Wires the pipeline together: load catalog once, load scenario,
// compute, render. The calculation itself lives in the engine crate.

use std::path::Path;

use clap::Parser;

use engine::Catalog;

pub mod cli;
pub mod logging;
pub mod scenario;
pub mod session;

pub use cli::Cli;
pub use logging::{init_log_file, next_seq, write_log};
pub use scenario::{load_scenario, RowSpec, ScenarioFile};
pub use session::{RowUpdate, Session};

/// Loads the catalog snapshot from a URL or a local path. The HTTP case is
/// the only asynchronous operation in the whole program, so it gets a
/// one-shot current-thread runtime instead of an async main.
fn load_catalog_source(cli: &Cli) -> Result<Catalog, String> {
    if cli.catalog_is_url() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| format!("Failed to start runtime: {}", e))?;
        runtime
            .block_on(catalog::fetch_catalog(&cli.catalog))
            .map_err(|e| format!("Failed to fetch catalog from {}: {}", cli.catalog, e))
    } else {
        catalog::load_catalog(Path::new(&cli.catalog))
            .map_err(|e| format!("Failed to load catalog from {}: {}", cli.catalog, e))
    }
}

fn run_inner(cli: &Cli) -> Result<(), String> {
    crate::log_enter_info!("APP", "run", "catalog={}", cli.catalog);

    let catalog = load_catalog_source(cli)?;
    crate::log_info!("APP", "Catalog loaded: {} products", catalog.len());

    let mut session = Session::new(catalog);
    if let Some(ref scenario_path) = cli.scenario {
        let rows = load_scenario(scenario_path)?;
        crate::log_info!("APP", "Scenario loaded: {} rows", rows.len());
        for row in rows {
            session.insert_row(row);
        }
    }

    let computed = session.computed_rows();
    let totals = session.totals();
    let tier = session.tier();

    print!("{}", report::render_text(&computed, &totals, tier));

    if let Some(ref xlsx_path) = cli.xlsx {
        report::save_xlsx(xlsx_path, &computed, &totals, tier)
            .map_err(|e| format!("Failed to write {:?}: {}", xlsx_path, e))?;
        crate::log_info!("APP", "Workbook written to {:?}", xlsx_path);
    }

    crate::log_exit_info!("APP", "run");
    Ok(())
}

/// CLI entry point. Returns the process exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();

    if let Some(ref log_path) = cli.log_file {
        if let Err(e) = init_log_file(log_path) {
            eprintln!("{}", e);
            return 1;
        }
    }

    match run_inner(&cli) {
        Ok(()) => 0,
        Err(e) => {
            crate::log_error!("APP", "{}", e);
            1
        }
    }
}

//! FILENAME: report/src/lib.rs
//! PURPOSE: Printable report surfaces for a computed EIQ scenario.
//! CONTEXT: Downstream consumer of the engine's computed rows and totals.
//! Two renderings of the same table: a fixed-width text form for the
//! terminal and an .xlsx workbook for printing.

pub mod error;
pub mod text;
pub mod xlsx;

pub use error::ReportError;
pub use text::{render_text, PLACEHOLDER};
pub use xlsx::save_xlsx;

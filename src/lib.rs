//! Seasonal SSRI prescribing report.
//!
//! Loads monthly prescribing extracts, keeps the five SSRI drug lines for a
//! set of health boards, and sums paid quantity per board, season and year.
pub mod aggregate;
pub mod config;
pub mod discover;
pub mod error;
pub mod filter;
pub mod loader;
pub mod lookup;
pub mod output;
pub mod pipeline;
pub mod reports;
pub mod transform;
pub mod types;
pub mod util;

pub use error::{ReportError, Result};
pub use pipeline::{execute_run, process_prescription_data};
pub use transform::Transformer;

//! # Quaternion CLI
//!
//! Demonstration driver for `quaternion-core`: parses two operand literals,
//! applies every quaternion operation to them and renders the results as
//! text or JSON.

pub mod config;
pub mod error;
pub mod report;

pub use config::{DemoConfig, OutputFormat};
pub use error::{CliError, CliResult};
pub use report::{build_report, run, Report, ReportEntry, ReportValue};

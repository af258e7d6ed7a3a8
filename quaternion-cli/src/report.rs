//! Demo report: every quaternion operation applied to two operands
//!
//! The report is a flat list of labelled values. Division failures are
//! recorded as error entries so one zero operand does not hide the rest of
//! the report.

use serde::Serialize;
use std::fmt;

use quaternion_core::{Quaternion, QuaternionError};

use crate::config::DemoConfig;
use crate::error::CliResult;

/// One reported value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReportValue {
    Quaternion(String),
    Number(f64),
    Flag(bool),
    Text(String),
    Error { code: String, message: String },
}

impl From<Quaternion> for ReportValue {
    fn from(q: Quaternion) -> Self {
        ReportValue::Quaternion(q.to_string())
    }
}

impl From<f64> for ReportValue {
    fn from(x: f64) -> Self {
        ReportValue::Number(x)
    }
}

impl From<bool> for ReportValue {
    fn from(flag: bool) -> Self {
        ReportValue::Flag(flag)
    }
}

impl From<Result<Quaternion, QuaternionError>> for ReportValue {
    fn from(result: Result<Quaternion, QuaternionError>) -> Self {
        match result {
            Ok(q) => q.into(),
            Err(e) => ReportValue::Error {
                code: e.error_code().to_string(),
                message: e.to_string(),
            },
        }
    }
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Quaternion(s) | ReportValue::Text(s) => f.write_str(s),
            ReportValue::Number(x) => write!(f, "{}", x),
            ReportValue::Flag(flag) => write!(f, "{}", flag),
            ReportValue::Error { code, message } => write!(f, "error {}: {}", code, message),
        }
    }
}

/// Labelled report line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub label: String,
    #[serde(flatten)]
    pub value: ReportValue,
}

/// Full demo report
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
}

impl Report {
    fn push(&mut self, label: &str, value: impl Into<ReportValue>) {
        self.entries.push(ReportEntry {
            label: label.to_string(),
            value: value.into(),
        });
    }

    /// Look up the first entry with the given label
    pub fn get(&self, label: &str) -> Option<&ReportValue> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| &e.value)
    }

    /// Number of entries holding a division or format error
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.value, ReportValue::Error { .. }))
            .count()
    }

    /// Render as `label: value` lines
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.label);
            out.push_str(": ");
            out.push_str(&entry.value.to_string());
            out.push('\n');
        }
        out
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> CliResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Apply every operation to the two operands
pub fn build_report(first: &Quaternion, second: &Quaternion) -> Report {
    let mut report = Report::default();

    report.push("first", *first);
    report.push("real", first.real());
    report.push("i", first.i());
    report.push("j", first.j());
    report.push("k", first.k());
    report.push("is_zero", first.is_zero());
    report.push("conjugate", first.conjugate());
    report.push("opposite", first.opposite());
    report.push("fingerprint", ReportValue::Text(first.fingerprint()));

    let copy = *first;
    report.push("clone equals original", copy == *first);

    let round_trip = Quaternion::value_of(&first.to_string());
    report.push(
        "string conversion equals original",
        matches!(round_trip, Ok(q) if q == *first),
    );

    report.push("second", *second);
    report.push("second fingerprint", ReportValue::Text(second.fingerprint()));
    report.push("equals", first == second);
    report.push("plus", first.plus(second));
    report.push("times", first.times(second));
    report.push("minus", first.minus(second));
    report.push("dot_mult", first.dot_mult(second));
    report.push("norm", first.norm());
    report.push("inverse", first.inverse());
    report.push("divide_by_right", first.divide_by_right(second));
    report.push("divide_by_left", first.divide_by_left(second));

    report
}

/// Parse the configured operands and build their report
pub fn run(config: &DemoConfig) -> CliResult<Report> {
    let first = Quaternion::value_of(&config.first)?;
    let second = Quaternion::value_of(&config.second)?;
    tracing::debug!(%first, %second, "operands parsed");

    let report = build_report(&first, &second);
    if report.error_count() > 0 {
        tracing::warn!(errors = report.error_count(), "report contains failed operations");
    }
    Ok(report)
}

//! Configuration for the quaternion demo driver

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Demo configuration
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// First operand literal
    #[serde(default = "default_first")]
    pub first: String,

    /// Second operand literal
    #[serde(default = "default_second")]
    pub second: String,

    /// Report output format
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_first() -> String { "12.0-34.0i+1.0j+5.0k".to_string() }
fn default_second() -> String { "1.0-2.0i-1.0j+2.0k".to_string() }

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            first: default_first(),
            second: default_second(),
            output: OutputFormat::Text,
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl DemoConfig {
    /// Parse a config from JSON text
    pub fn from_json(json: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Apply command-line overrides on top of this config
    pub fn with_overrides(mut self, first: Option<String>, second: Option<String>, json: bool) -> Self {
        if let Some(first) = first {
            self.first = first;
        }
        if let Some(second) = second {
            self.second = second;
        }
        if json {
            self.output = OutputFormat::Json;
        }
        self
    }
}

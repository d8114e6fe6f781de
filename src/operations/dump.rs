//! Dump a parsed flag table for inspection

use core::str::FromStr;

use crate::error::ArgTableError;
use crate::table::ParsedArgs;
use anyhow::Result;

/// Output format for table dumps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum DumpFormat {
    /// One `key=value` line per effective flag
    #[default]
    Table,
    /// Table and history as a JSON object
    Json,
    /// Table and history as YAML
    Yaml,
}

impl FromStr for DumpFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!(
                "Invalid format: {s}. Use 'table', 'json' or 'yaml'"
            )),
        }
    }
}

/// Render a parsed table in the requested format
///
/// # Errors
///
/// Returns an error if:
/// - The table cannot be serialized to JSON or YAML
#[inline]
pub fn dump(parsed: &ParsedArgs, format: DumpFormat) -> Result<String> {
    match format {
        DumpFormat::Table => Ok(format_as_table(parsed)),
        DumpFormat::Json => serde_json::to_string_pretty(parsed).map_err(|e| {
            anyhow::Error::from(ArgTableError::serialization(format!(
                "Failed to serialize to JSON: {e}"
            )))
        }),
        DumpFormat::Yaml => serde_yaml::to_string(parsed).map_err(|e| {
            anyhow::Error::from(ArgTableError::serialization(format!(
                "Failed to serialize to YAML: {e}"
            )))
        }),
    }
}

fn format_as_table(parsed: &ParsedArgs) -> String {
    let mut output = String::new();
    for (key, value) in parsed.table() {
        output.push_str(key);
        if !value.is_empty() {
            output.push('=');
            output.push_str(value);
        }
        output.push('\n');
    }
    output
}

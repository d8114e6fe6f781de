//! Convert a parsed flag table back to command-line arguments

use core::str::FromStr;

use crate::error::ArgTableError;
use crate::table::ParsedArgs;
use crate::table::coerce::{bool_value, interpret_bool};
use crate::table::parser::NEGATION_PREFIX;
use anyhow::Result;

/// Output format for command-line representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Shell-escaped arguments ready to paste
    Shell,
    /// JSON array of arguments
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shell" => Ok(Self::Shell),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {s}. Use 'shell' or 'json'")),
        }
    }
}

/// Convert a parsed table to its command-line representation
///
/// # Errors
///
/// Returns an error if:
/// - The arguments cannot be serialized to the requested format
#[inline]
pub fn generate_command_line(parsed: &ParsedArgs, format: OutputFormat) -> Result<String> {
    let args = to_tokens(parsed);

    match format {
        OutputFormat::Shell => Ok(format_as_shell(&args)),
        OutputFormat::Json => format_as_json(&args),
    }
}

/// Canonical arguments for the effective table, one per flag in key order
///
/// Parsing the result again yields the same effective table. Negations are
/// already folded into their positive flag, so no `-no` spelling is emitted
/// for them. A table key that itself starts with `-no` can only come from a
/// double negation, so it is spelled that way again when its value is boolean.
#[must_use]
pub fn to_tokens(parsed: &ParsedArgs) -> Vec<String> {
    parsed
        .table()
        .iter()
        .map(|(key, value)| format_flag(key, value))
        .collect()
}

/// Format one flag as "-key" or "-key=value"
///
/// Keys that themselves start with `--` get one extra dash, since the parser
/// drops one from any `--` spelling. A `-noX` key holding `"0"` or `"1"` is
/// written as `-nonoX` with the inverted value.
fn format_flag(key: &str, value: &str) -> String {
    let double_negated = key
        .strip_prefix(NEGATION_PREFIX)
        .is_some_and(|rest| !rest.is_empty());
    if double_negated && matches!(value, "0" | "1") {
        let inverted = bool_value(!interpret_bool(value));
        return format!("{NEGATION_PREFIX}{}={inverted}", &key[1..]);
    }
    let spelled = if key.starts_with("--") {
        format!("-{key}")
    } else {
        key.to_owned()
    };
    if value.is_empty() {
        spelled
    } else {
        format!("{spelled}={value}")
    }
}

/// Format arguments as a shell command line with proper escaping
fn format_as_shell(args: &[String]) -> String {
    let mut output = String::new();

    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            output.push_str(" \\\n  ");
        }

        let escaped = shell_escape(arg);
        output.push_str(&escaped);
    }

    output
}

/// Format arguments as JSON array
fn format_as_json(args: &[String]) -> Result<String> {
    serde_json::to_string_pretty(args).map_err(|e| {
        anyhow::Error::from(ArgTableError::serialization(format!(
            "Failed to serialize to JSON: {e}"
        )))
    })
}

/// Escape a string for shell execution
/// Uses single quotes, so nothing inside is expanded; an embedded `'` becomes `'\''`
fn shell_escape(s: &str) -> String {
    if !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '-' | '_' | '/' | '.' | ':' | '=' | ',' | '+')
        })
    {
        return s.to_owned();
    }

    let mut result = String::from('\'');
    for ch in s.chars() {
        if ch == '\'' {
            result.push_str(r"'\''");
        } else {
            result.push(ch);
        }
    }
    result.push('\'');
    result
}

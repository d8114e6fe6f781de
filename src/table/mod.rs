//! Flag table module
//!
//! Parses `-flag[=value]` arguments into an immutable lookup table and
//! provides the string, integer, boolean and multi-value accessors.

pub mod coerce;
pub mod parser;
pub mod shared;

pub use parser::{Token, parse, parse_line};
pub use shared::SharedArgs;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical key -> effective value
pub type ArgumentTable = BTreeMap<String, String>;

/// Canonical key -> every value the key received, in encounter order
pub type ArgumentHistory = BTreeMap<String, Vec<String>>;

/// Result of parsing one argument list
///
/// Built once by [`parse`] and read many times afterwards. Every key in the
/// table also has an entry in the history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ParsedArgs {
    /// Effective value per flag
    pub table: ArgumentTable,

    /// All values per flag, including negated spellings
    pub history: ArgumentHistory,
}

impl ParsedArgs {
    /// Parse arguments (program name excluded)
    #[inline]
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parser::parse(args)
    }

    /// Parse a whitespace-separated argument string
    #[must_use]
    #[inline]
    pub fn from_line(line: &str) -> Self {
        parser::parse_line(line)
    }

    /// Effective flag values
    #[must_use]
    #[inline]
    pub const fn table(&self) -> &ArgumentTable {
        &self.table
    }

    /// Every value each flag received
    #[must_use]
    #[inline]
    pub const fn history(&self) -> &ArgumentHistory {
        &self.history
    }

    /// Whether the flag has an effective value
    #[must_use]
    #[inline]
    pub fn is_set(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Get a flag's raw value, or `default` when it is absent
    #[must_use]
    #[inline]
    pub fn get_arg(&self, key: &str, default: &str) -> String {
        self.table
            .get(key)
            .map_or_else(|| default.to_owned(), Clone::clone)
    }

    /// Get a flag's value as an integer, or `default` when it is absent
    ///
    /// A present but non-numeric value reads as `0`, not as `default`.
    #[must_use]
    #[inline]
    pub fn get_int_arg(&self, key: &str, default: i64) -> i64 {
        self.table
            .get(key)
            .map_or(default, |value| coerce::interpret_int(value))
    }

    /// Get a flag's value as a boolean, or `default` when it is absent
    ///
    /// Any present value other than `"0"` is true, including no value at all.
    #[must_use]
    #[inline]
    pub fn get_bool_arg(&self, key: &str, default: bool) -> bool {
        self.table
            .get(key)
            .map_or(default, |value| coerce::interpret_bool(value))
    }

    /// Get every value a flag received, oldest first
    #[must_use]
    #[inline]
    pub fn get_args(&self, key: &str) -> &[String] {
        self.history
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Set `key` to `value` unless it already has a value
    ///
    /// Consumes the table and hands back the result together with whether the
    /// value was applied.
    #[must_use]
    pub fn soft_set_arg(mut self, key: &str, value: &str) -> (Self, bool) {
        if self.is_set(key) {
            return (self, false);
        }
        self.table.insert(key.to_owned(), value.to_owned());
        self.history
            .entry(key.to_owned())
            .or_default()
            .push(value.to_owned());
        (self, true)
    }

    /// Boolean form of [`ParsedArgs::soft_set_arg`]
    #[must_use]
    #[inline]
    pub fn soft_set_bool_arg(self, key: &str, value: bool) -> (Self, bool) {
        self.soft_set_arg(key, coerce::bool_value(value))
    }
}

//! Two-pass flag parser
//!
//! Pass one records every direct `-flag[=value]` occurrence, last one wins.
//! Pass two resolves deferred `-noflag[=value]` occurrences, but only for
//! flags that no direct occurrence set, wherever it appeared on the line.

use super::coerce::{bool_value, interpret_bool};
use super::{ArgumentHistory, ArgumentTable, ParsedArgs};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Prefix marking a negated flag, e.g. `-nowallet`
pub const NEGATION_PREFIX: &str = "-no";

/// One raw argument split into its canonical key and value
///
/// Both parts borrow from the raw argument. The key always keeps exactly one
/// leading dash of a `--flag` spelling, so `--flag` and `-flag` share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Canonical key, e.g. `-datadir`
    pub key: &'a str,
    /// Everything after the first `=`, or empty when there is none
    pub value: &'a str,
}

impl<'a> Token<'a> {
    /// Split a raw argument
    ///
    /// Returns `None` for arguments without a leading dash, including the
    /// empty string.
    #[must_use]
    #[inline]
    pub fn parse(raw: &'a str) -> Option<Self> {
        let body = raw.strip_prefix('-')?;
        let flag = if body.starts_with('-') { body } else { raw };
        let (key, value) = flag.split_once('=').unwrap_or((flag, ""));
        Some(Self { key, value })
    }

    /// The positive key this token negates, if it is a negated flag
    ///
    /// `-nowallet` targets `-wallet`. A bare `-no` negates nothing and is an
    /// ordinary flag.
    #[must_use]
    #[inline]
    pub fn negated_target(&self) -> Option<String> {
        let rest = self.key.strip_prefix(NEGATION_PREFIX)?;
        if rest.is_empty() {
            return None;
        }
        Some(format!("-{rest}"))
    }
}

/// Parse arguments (program name excluded) into a flag table
///
/// Never fails. Arguments without a leading dash are skipped.
pub fn parse<I, S>(args: I) -> ParsedArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let raw: Vec<S> = args.into_iter().collect();

    let mut table = ArgumentTable::new();
    let mut history = ArgumentHistory::new();
    let mut negations: Vec<(String, &str)> = Vec::new();

    // Pass 1: direct flags
    for arg in &raw {
        let Some(token) = Token::parse(arg.as_ref()) else {
            trace!("Ignoring non-flag argument: {:?}", arg.as_ref());
            continue;
        };
        trace!("Flag {} = {:?}", token.key, token.value);

        history
            .entry(token.key.to_owned())
            .or_default()
            .push(token.value.to_owned());

        match token.negated_target() {
            Some(target) => negations.push((target, token.value)),
            None => {
                table.insert(token.key.to_owned(), token.value.to_owned());
            }
        }
    }

    // Pass 2: negated flags, only where no direct occurrence exists
    let mut resolved: BTreeMap<String, &'static str> = BTreeMap::new();
    for (target, value) in negations {
        if table.contains_key(&target) {
            debug!("Direct {target} overrides its negation");
            continue;
        }
        let effective = bool_value(!interpret_bool(value));
        debug!("Negation sets {target} = {effective}");
        history
            .entry(target.clone())
            .or_default()
            .push(effective.to_owned());
        resolved.insert(target, effective);
    }
    table.extend(
        resolved
            .into_iter()
            .map(|(key, value)| (key, value.to_owned())),
    );

    debug!(
        "Parsed {} arguments into {} flags ({} keys in history)",
        raw.len(),
        table.len(),
        history.len()
    );

    ParsedArgs { table, history }
}

/// Parse a single command-line string, splitting on runs of whitespace
#[inline]
pub fn parse_line(line: &str) -> ParsedArgs {
    parse(line.split_whitespace())
}

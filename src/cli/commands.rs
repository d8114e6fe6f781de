//! CLI command implementations

use crate::cli::{Args, Lookup, QueryArgs};
use crate::error::ArgTableError;
use crate::operations::{DumpFormat, OutputFormat, dump, generate_command_line};
use crate::table::{ParsedArgs, coerce};
use anyhow::{Context as _, Result};
use tracing::debug;

/// Produce the text the command prints for the given arguments
///
/// # Errors
///
/// Returns an error if:
/// - A format name is not recognised
/// - An integer default is not a number
/// - The table cannot be serialized
pub fn execute(args: &Args) -> Result<String> {
    let tokens = args.collect_tokens();
    debug!("Parsing {} arguments", tokens.len());
    let parsed = ParsedArgs::parse(&tokens);

    if let Some(lookup) = args.query.lookup() {
        return execute_lookup(&parsed, &lookup, &args.query);
    }

    if args.to_command_line {
        let format = args
            .output_format
            .parse::<OutputFormat>()
            .map_err(ArgTableError::usage)?;
        return generate_command_line(&parsed, format)
            .context("Failed to generate command line");
    }

    execute_dump(&parsed, &args.format)
}

/// Answer a single lookup
///
/// # Errors
///
/// Returns an error if:
/// - `--get-int` is given a non-numeric `--default`
pub fn execute_lookup(parsed: &ParsedArgs, lookup: &Lookup, query: &QueryArgs) -> Result<String> {
    let default = query.default.as_deref();

    let output = match *lookup {
        Lookup::Arg(ref key) => parsed.get_arg(key, default.unwrap_or_default()),
        Lookup::Int(ref key) => {
            let default = match default {
                Some(text) => text.trim().parse::<i64>().map_err(|e| {
                    ArgTableError::usage(format!("Invalid integer default '{text}': {e}"))
                })?,
                None => 0,
            };
            parsed.get_int_arg(key, default).to_string()
        }
        Lookup::Bool(ref key) => {
            let default = default.is_some_and(coerce::interpret_bool);
            parsed.get_bool_arg(key, default).to_string()
        }
        Lookup::All(ref key) => parsed.get_args(key).join("\n"),
    };

    Ok(output)
}

/// Dump the whole table
///
/// # Errors
///
/// Returns an error if:
/// - `format` is not a known dump format
/// - The table cannot be serialized
pub fn execute_dump(parsed: &ParsedArgs, format: &str) -> Result<String> {
    let format = format
        .parse::<DumpFormat>()
        .map_err(ArgTableError::usage)?;
    dump(parsed, format).context("Failed to dump flag table")
}

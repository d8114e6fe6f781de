//! # `ArgTable`
//!
//! `argtable` shows how a list of `-flag[=value]` arguments resolves into a
//! flag table: which value wins, how `-noflag` negations apply, and what each
//! typed lookup returns.
//!
//! ## Usage
//!
//! **Dump the resolved table:**
//! ```sh
//! argtable -- -datadir=/tmp -nolisten --debug
//! ```
//!
//! **Single lookups:**
//! ```sh
//! argtable --get-bool -listen --default 1 -- -nolisten
//! argtable --get-int -rpcport --default 8332 -- -rpcport=18332
//! ```
//!
//! **Canonical command line:**
//! ```sh
//! argtable --to-command-line --output-format json -- --noADC -bar=1
//! ```

use anyhow::Result;
use argtable::cli::Args;
use argtable::error::ArgTableError;
use clap::Parser as _;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so dumps on stdout stay machine-readable
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match argtable::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<ArgTableError>()
                    .map_or(1, ArgTableError::exit_code),
            );
        }
    }
}

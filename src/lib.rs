//! `ArgTable` - command-line flag tables with `-noflag` negation
//!
//! This library turns process arguments such as `-datadir=/tmp -nolisten`
//! into an immutable table with string, integer, boolean and multi-value
//! lookups. A direct `-flag` always wins over `-noflag`, wherever either
//! appears on the line.
//!
//! ```
//! use argtable::ParsedArgs;
//!
//! let args = ParsedArgs::parse(["-rpcport=8332", "-nolisten", "--debug"]);
//! assert_eq!(args.get_int_arg("-rpcport", 0), 8332);
//! assert!(!args.get_bool_arg("-listen", true));
//! assert!(args.get_bool_arg("-debug", false));
//! assert_eq!(args.get_arg("-datadir", "~/.node"), "~/.node");
//! ```

pub mod cli;
pub mod error;
pub mod operations;
pub mod table;

pub use table::{ArgumentHistory, ArgumentTable, ParsedArgs, SharedArgs};

use anyhow::Result;
use cli::Args;

/// Main entry point for the argtable binary
///
/// Prints the requested lookup or dump to stdout.
pub fn run(args: &Args) -> Result<()> {
    let output = cli::execute(args)?;

    // Output to stdout (not using logging)
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }

    Ok(())
}

use clap::Parser;

/// Command-line arguments for argtable
#[derive(Parser, Debug, Clone)]
#[command(name = "argtable")]
#[command(about = "Show how -flag=value arguments resolve into a flag table")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Output format for the table dump: table, json or yaml
    #[arg(
        long,
        value_name = "FORMAT",
        default_value = "table",
        env = "ARGTABLE_FORMAT"
    )]
    pub format: String,

    /// Output the canonical command line instead of the table
    #[arg(long = "to-command-line")]
    pub to_command_line: bool,

    /// Output format for to-command-line: shell or json
    #[arg(
        long = "output-format",
        value_name = "FORMAT",
        default_value = "shell",
        requires = "to_command_line"
    )]
    pub output_format: String,

    /// Whitespace-separated arguments, parsed after ARGS
    #[arg(long, value_name = "LINE", allow_hyphen_values = true)]
    pub line: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Single-flag lookups
    #[command(flatten)]
    pub query: QueryArgs,

    /// Arguments to parse, usually given after `--`
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

impl Args {
    /// Every argument to parse: trailing ARGS first, then the split `--line`
    #[must_use]
    pub fn collect_tokens(&self) -> Vec<String> {
        let mut tokens = self.tokens.clone();
        if let Some(line) = self.line.as_ref() {
            tokens.extend(line.split_whitespace().map(str::to_owned));
        }
        tokens
    }
}

/// Lookups against the parsed table (at most one per invocation)
#[derive(clap::Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Print a flag's string value
    #[arg(
        long,
        value_name = "KEY",
        allow_hyphen_values = true,
        conflicts_with_all = ["get_int", "get_bool", "get_all", "to_command_line"]
    )]
    pub get: Option<String>,

    /// Print a flag's integer value
    #[arg(
        long = "get-int",
        value_name = "KEY",
        allow_hyphen_values = true,
        conflicts_with_all = ["get_bool", "get_all", "to_command_line"]
    )]
    pub get_int: Option<String>,

    /// Print a flag's boolean value
    #[arg(
        long = "get-bool",
        value_name = "KEY",
        allow_hyphen_values = true,
        conflicts_with_all = ["get_all", "to_command_line"]
    )]
    pub get_bool: Option<String>,

    /// Print every value a flag received, one per line
    #[arg(
        long = "get-all",
        value_name = "KEY",
        allow_hyphen_values = true,
        conflicts_with = "to_command_line"
    )]
    pub get_all: Option<String>,

    /// Default for --get, --get-int and --get-bool when the flag is absent
    /// (for --get-bool only "0" is false, so "false" counts as true)
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub default: Option<String>,
}

/// A single lookup requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Lookup {
    /// `--get`
    Arg(String),
    /// `--get-int`
    Int(String),
    /// `--get-bool`
    Bool(String),
    /// `--get-all`
    All(String),
}

impl QueryArgs {
    /// The requested lookup, if any
    #[must_use]
    pub fn lookup(&self) -> Option<Lookup> {
        if let Some(key) = self.get.as_ref() {
            return Some(Lookup::Arg(key.clone()));
        }
        if let Some(key) = self.get_int.as_ref() {
            return Some(Lookup::Int(key.clone()));
        }
        if let Some(key) = self.get_bool.as_ref() {
            return Some(Lookup::Bool(key.clone()));
        }
        self.get_all.clone().map(Lookup::All)
    }
}

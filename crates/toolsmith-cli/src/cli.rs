//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Toolsmith: deep copies, conversions, and path checks
#[derive(Parser, Debug)]
#[command(name = "toolsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TOOLSMITH_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check that a path contains no reserved characters
    Path {
        /// Path to check
        path: String,
    },

    /// Check that a file name is usable on this host
    FileName {
        /// File name to check
        name: String,
    },

    /// Create a directory and any missing parents
    Mkdir {
        /// Directory to create
        path: String,
    },

    /// Coerce a value to another type
    Convert {
        /// Target type
        #[arg(long, value_enum)]
        to: Target,

        /// Value as JSON; anything that is not JSON is taken as text
        value: String,
    },

    /// Render a date-time as MM/dd/yyyy h:mm:ss AM|PM
    Date {
        /// Date-time text
        value: String,
    },

    /// Deep-copy a JSON document through the graph cloner
    #[command(name = "clone")]
    CloneJson {
        /// JSON file to read, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Override the configured maximum depth
        #[arg(long)]
        max_depth: Option<usize>,

        /// Pretty-print the copy
        #[arg(long)]
        pretty: bool,
    },

    /// Inspect configuration
    Config {
        /// Config action (defaults to `show`)
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Get a configuration value by dotted key
    Get {
        /// Dotted key, e.g. `clone.max_depth`
        key: String,
    },

    /// Write a default configuration file
    Init {
        /// Destination (defaults to the user config directory)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Conversion targets for `convert --to`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// 32-bit integer
    I32,
    /// 64-bit integer
    I64,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
    /// Exact decimal
    Decimal,
    /// Boolean
    Bool,
    /// Single character
    Char,
    /// Text
    String,
}

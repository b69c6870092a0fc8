use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldmask")]
#[command(about = "Mask sensitive fields in JSON payloads", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mask a JSON document read from a file or stdin
    Mask {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Additional field name to mask (repeatable)
        #[arg(short = 'f', long = "field")]
        fields: Vec<String>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,

        /// Treat the input as one JSON document per line
        #[arg(long, conflicts_with = "pretty")]
        lines: bool,

        /// Log how many values were masked per field
        #[arg(long)]
        report: bool,

        /// Config file (defaults to the user config dir)
        #[arg(long, env = "FIELDMASK_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Print the obscured form of each argument
    Obscure {
        /// Strings to obscure
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// List the field names that would be masked
    Fields {
        /// Additional field name (repeatable)
        #[arg(short = 'f', long = "field")]
        fields: Vec<String>,

        /// Config file (defaults to the user config dir)
        #[arg(long, env = "FIELDMASK_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the default config file location
    Path,
}

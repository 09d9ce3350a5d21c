// src/cli/mod.rs - CLI definition (clap derive)

pub mod extract;
pub mod predict;
pub mod show;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "daypattern",
    about = "Learn typical leaving/returning times per day type",
    version
)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract patterns from a presence log and save them
    Extract {
        /// Delimited dataset with day_type, leaving_time and returning_time columns
        dataset: String,
        /// Artifact path (defaults to [output].path, then patterns.bin)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the contents of a saved artifact
    Show {
        /// Artifact path (defaults to [output].path)
        artifact: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = ShowFormat::Text)]
        format: ShowFormat,
    },
    /// Look up the expected leaving/returning times for a date
    Predict {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Artifact path (defaults to [output].path)
        #[arg(long)]
        artifact: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Text,
    Json,
    Yaml,
}

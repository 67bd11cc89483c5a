use crate::io::{OutputFormat, ReportKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wheeldex")]
#[command(about = "Show what a Python wheel makes importable", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify the modules in a wheel and print a report
    Show {
        /// Path to the .whl file
        path: PathBuf,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Report to print (defaults to the config file, then summary)
        #[arg(short, long, value_enum)]
        report: Option<ReportKind>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Initialize a .wheeldex.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Log level for a `-v` count; `RUST_LOG` still wins when set
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

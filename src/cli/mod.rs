//! Command-line interface
//!
//! The binary takes a handful of global flags and then hands control to the
//! interactive [`Shell`]. All ticket state lives for the length of one run.

pub mod output;
pub mod shell;

pub use output::OutputFormatter;
pub use shell::{MenuChoice, Shell};

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "callcenter-ticket",
    version,
    about = "In-memory support ticket desk for call center operators"
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Render listings and ticket details as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file (defaults to ./callcenter.toml when present)
    #[arg(short, long, value_name = "FILE", env = "CALLCENTER_CONFIG")]
    pub config: Option<PathBuf>,
}

//! callcenter-ticket - Interactive support ticket desk
//!
//! This is the main entry point for the callcenter-ticket CLI application.
//! It parses global flags, loads configuration, sets up logging and then
//! runs the menu shell against stdin/stdout.

use callcenter_ticket::cli::{Cli, OutputFormatter, Shell};
use callcenter_ticket::config::AppConfig;
use callcenter_ticket::error::{CallCenterError, Result};
use callcenter_ticket::services::TicketDesk;
use callcenter_ticket::storage::TicketRepository;
use clap::Parser;
use colored::Colorize;
use std::io::{self, IsTerminal};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        handle_error(&e);
        process::exit(1);
    }
}

/// Run the shell with the parsed arguments
///
/// # Errors
///
/// Returns configuration errors and unrecoverable console I/O errors
fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &config.log.level);

    let json = cli.json || config.ui.json;
    let color = !cli.no_color && config.ui.color && io::stdout().is_terminal();
    if !color {
        colored::control::set_override(false);
    }

    let desk: TicketDesk = TicketDesk::default();
    let formatter = OutputFormatter::new(io::stdout().lock(), json, color);
    let mut shell = Shell::new(desk, io::stdin().lock(), formatter);
    shell.run(&config.ui.banner)?;

    tracing::debug!(
        remaining = shell.desk().repository().len(),
        "shell finished"
    );
    Ok(())
}

/// Logs go to stderr so they never interleave with shell output
fn init_logging(verbose: bool, default_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn handle_error(error: &CallCenterError) {
    eprintln!("{} {}", "error:".red().bold(), error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        eprintln!("\nSuggestions:");
        for suggestion in &suggestions {
            eprintln!("  • {suggestion}");
        }
    }

    if error.is_config_error() {
        eprintln!("\nRun with --config <path> to load a different settings file.");
    }

    // In verbose mode, show the full error
    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}

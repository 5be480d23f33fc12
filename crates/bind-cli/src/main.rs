//! bind-scaffold CLI
//!
//! Composes cloud service binding artifacts into a project directory.
//!
//! # Usage
//!
//! ```bash
//! bind-scaffold --project-dir . --templates-dir templates
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `warn`)

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    commands::run_scaffold(&cli)
}

// Logs go to stderr so the summary on stdout stays scriptable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

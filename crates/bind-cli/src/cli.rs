//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// bind-scaffold - Compose cloud service binding artifacts into a project
///
/// Reads `scaffold.toml` and the binding set from the project directory,
/// composes artifacts for every selected service, and writes them into the
/// project.
#[derive(Parser, Debug)]
#[command(name = "bind-scaffold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project directory holding scaffold.toml and the binding set
    #[arg(short, long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Root of the service template tree
    #[arg(short, long, default_value = "templates")]
    pub templates_dir: PathBuf,

    /// Target language (overrides scaffold.toml)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Compose only these services (overrides scaffold.toml)
    #[arg(short, long)]
    pub services: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

//! Scaffolding run wiring

use crate::cli::Cli;
use crate::error::Result;
use bind_core::{ComposeOutcome, ComposeReport, Composer, PersistReport, ProjectContext, run_all};
use bind_fs::{RunConfig, TemplateStore, load_document};
use bind_meta::{LanguageTarget, ServiceRegistry};
use colored::Colorize;
use serde_json::Value;
use tracing::debug;

/// Run one scaffolding pass and print the per-service summary.
pub fn run_scaffold(cli: &Cli) -> Result<()> {
    let (reports, persisted) = execute(cli)?;

    for report in &reports {
        match &report.outcome {
            ComposeOutcome::Done if report.actions.is_empty() => {
                println!("{} {}", "done".green().bold(), report.service);
            }
            ComposeOutcome::Done => {
                println!(
                    "{} {} ({})",
                    "done".green().bold(),
                    report.service,
                    report.actions.join(", ")
                );
            }
            ComposeOutcome::Skipped(reason) => {
                println!("{} {} ({reason})", "skip".yellow().bold(), report.service);
            }
            ComposeOutcome::Failed(message) => {
                println!("{} {} ({message})", "fail".red().bold(), report.service);
            }
        }
    }
    println!(
        "{} file(s) written, {} unchanged",
        persisted.written.len(),
        persisted.skipped.len()
    );
    Ok(())
}

/// Load configuration, compose every selected service, and persist.
///
/// Unreadable configuration, an unknown language, and an unknown service
/// tag in the filter are fatal; per-service composition failures are not.
pub fn execute(cli: &Cli) -> Result<(Vec<ComposeReport>, PersistReport)> {
    let config = RunConfig::load(&cli.project_dir.join("scaffold.toml"))?;

    let language: LanguageTarget = match &cli.language {
        Some(lang) => lang.parse()?,
        None => config.project.language.parse()?,
    };

    let bindings_path = cli.project_dir.join(&config.services.bindings);
    let binding_set: Value = load_document(&bindings_path)?;

    let registry = ServiceRegistry::with_builtins();
    let selected: Vec<String> = if !cli.services.is_empty() {
        cli.services.clone()
    } else if let Some(only) = &config.services.only {
        only.clone()
    } else {
        registry.list().iter().map(|s| s.to_string()).collect()
    };
    // Misconfigured filters fail before anything is composed.
    for name in &selected {
        registry.get(name)?;
    }
    debug!(
        app = %config.project.app_name,
        language = %language,
        services = selected.len(),
        "starting scaffolding run"
    );

    let composer = Composer::new(TemplateStore::new(&cli.templates_dir));
    let mut ctx = ProjectContext::new(&cli.project_dir, &config.project.app_name, binding_set);

    let reports = run_all(&composer, &registry, &selected, language, &mut ctx);
    let persisted = ctx.persist()?;

    Ok((reports, persisted))
}

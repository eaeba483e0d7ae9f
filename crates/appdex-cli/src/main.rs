//! Appdex CLI
//!
//! Thin adapter around the Appdex library crates: reads a README catalog
//! from disk, extracts its entries, runs every check, and prints the
//! violations. Exits non-zero when the document fails any check, so the
//! binary can gate CI.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use appdex_checks::{run_checks, CheckConfig};
use appdex_content::{extract, ExtractContext};
use appdex_core::types::{Catalog, Violation};

/// Appdex - README catalog linter
#[derive(Parser, Debug)]
#[command(name = "appdex")]
#[command(about = "Lint a README catalog for formatting violations", long_about = None)]
struct Args {
    /// Path to the README to lint
    #[arg(default_value = "README.md")]
    readme: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// One line per violation, plus a summary
    Text,
    /// The violation list as JSON
    Json,
}

/// The outcome of linting one document.
struct Report {
    catalog: Catalog,
    violations: Vec<Violation>,
}

async fn lint_readme(path: &Path) -> Result<Report> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let catalog = extract(&content, &ExtractContext::default());
    tracing::debug!(
        entries = catalog.entries.len(),
        categories = catalog.categories.len(),
        "extracted catalog"
    );

    let violations = run_checks(&catalog, &CheckConfig::default())?;
    Ok(Report {
        catalog,
        violations,
    })
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let report = lint_readme(&args.readme).await?;

    match args.format {
        Format::Text => {
            for violation in &report.violations {
                println!("{violation}");
            }
            println!(
                "{} apps in readme, {} violations",
                report.catalog.entries.len(),
                report.violations.len()
            );
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&report.violations)?);
        }
    }

    if report.violations.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

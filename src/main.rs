// src/main.rs

use anyhow::Result;
use clap::Parser;
use srcbundle::cli::Cli;
use srcbundle::config::ConfigBuilder;
use srcbundle::constants::{EXIT_FAILURE, EXIT_OUTPUT_ERROR, EXIT_SOURCE_ERROR};
use srcbundle::errors::Error;
use srcbundle::progress::reporter_for_stderr;
use srcbundle::{dry_run, run};

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG directives are extended with a crate default.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "srcbundle=debug".parse()?
                } else {
                    "srcbundle=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting srcbundle v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration ---
    let cli = Cli::parse();
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };
    log::debug!("Configuration built successfully.");

    // --- Execution ---
    if config.dry_run {
        let stdout = std::io::stdout();
        let result = dry_run(&config, &mut stdout.lock());
        return match result {
            Ok(_) => Ok(()),
            Err(e) => exit_with(e),
        };
    }

    let progress = reporter_for_stderr();
    match run(&config, progress.as_ref()) {
        Ok(report) => {
            if report.skipped.is_empty() {
                println!(
                    "Bundled {} files into {}",
                    report.bundled,
                    config.output_file.display()
                );
            } else {
                println!(
                    "Bundled {} files into {} ({} skipped due to errors)",
                    report.bundled,
                    config.output_file.display(),
                    report.skipped.len()
                );
            }
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}

/// Reports a fatal or terminal error and exits with its code.
fn exit_with(e: Error) -> Result<()> {
    match e {
        Error::NoFilesFound => {
            eprintln!("No files found to bundle.");
            Ok(())
        }
        Error::Filesystem { .. } | Error::NotADirectory { .. } => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_SOURCE_ERROR);
        }
        Error::OutputOpen { .. } | Error::OutputWrite(_) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_OUTPUT_ERROR);
        }
        _ => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

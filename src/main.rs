//! sigsearch CLI entry point

use std::path::Path;
use std::process::ExitCode;

use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use sigsearch::{format_results, search, CapabilityRegistry, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Logs go to stderr; stdout carries only results
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SIGSEARCH_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> sigsearch::Result<String> {
    let registry = CapabilityRegistry::with_defaults()?;
    let options = cli.to_options();

    let bar = if cli.no_progress || cli.verbose {
        ProgressBar::hidden()
    } else {
        spinner()
    };
    let on_file = |path: &Path| {
        bar.inc(1);
        if let Some(name) = path.file_name() {
            bar.set_message(format!("Processing {}", name.to_string_lossy()));
        }
    };

    let report = search(&cli.signature, &cli.root, &options, &registry, Some(&on_file));
    bar.finish_and_clear();
    let report = report?;

    if !report.failures.is_empty() {
        eprintln!(
            "Skipped {} of {} files",
            report.failures.len(),
            report.files_scanned
        );
    }

    format_results(&report.results, cli.format)
}

fn spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {pos} files {msg}") {
        bar.set_style(style);
    }
    bar
}

//! dirmatch - approximate file-by-file comparison of two directory trees.
//!
//! Usage:
//!   dirmatch DIR_D DIR_T [OUTPUT_CSV]     Compare the two roots
//!   dirmatch -r DIR_D DIR_T               Compare every common subdirectory
//!   dirmatch -r -e tmp,cache DIR_D DIR_T  Skip subdirectories matching patterns
//!   dirmatch --help                       Show help

mod cli;
mod logging;
mod settings;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Context, Report, Result};
use tracing::{info, warn};

use dirmatch_analyze::TreeComparator;
use dirmatch_core::CompareError;
use dirmatch_report::{CsvSink, SummaryRenderer, TableRenderer};
use dirmatch_scan::TreeEnumerator;

use cli::{Cli, OutputFormat};
use settings::{FileSettings, SettingsError, resolve_config, resolve_format};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // help and version print to stdout and are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = color_eyre::install() {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    logging::init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            eprintln!("Error: {report:?}");
            if is_argument_error(&report) {
                eprintln!();
                eprintln!("{}", Cli::command().render_usage());
                eprintln!("For more information, try '--help'.");
            }
            ExitCode::FAILURE
        }
    }
}

/// Errors caused by what was passed on the command line.
fn is_argument_error(report: &Report) -> bool {
    report
        .downcast_ref::<CompareError>()
        .is_some_and(CompareError::is_argument_error)
        || report.downcast_ref::<SettingsError>().is_some()
}

fn run(cli: &Cli) -> Result<()> {
    let file = match &cli.config {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };
    let format = resolve_format(cli, &file);
    let config = resolve_config(cli, &file)?;

    if !config.recursive && !config.exclude.is_empty() {
        warn!("--exclude only applies with --recursive, ignoring it");
    }

    // Validate and enumerate before anything is written.
    let enumeration = TreeEnumerator::new(&config).enumerate()?;
    info!(
        dir_d = %config.dir_d.display(),
        dir_t = %config.dir_t.display(),
        pairs = enumeration.pairs.len(),
        "starting comparison"
    );

    let mut sink = CsvSink::create(&config.output)?;
    let mut comparator = TreeComparator::new(&config);
    let stdout = io::stdout();

    let mut report = match format {
        OutputFormat::Text => {
            let mut table = TableRenderer::new(stdout.lock());
            let report = comparator.compare(&enumeration.pairs, |pair, records| {
                table.render_pair(&pair.display_name(), records)?;
                sink.write_records(records)
            })?;
            table.flush()?;
            report
        }
        OutputFormat::Json => comparator.compare(&enumeration.pairs, |_, records| {
            sink.write_records(records)
        })?,
    };
    sink.flush()
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    let mut warnings = enumeration.warnings;
    warnings.append(&mut report.warnings);
    report.warnings = warnings;

    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            SummaryRenderer::new(config.display_cap, &config.output)
                .render(&mut out, &report)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    info!(
        output = %config.output.display(),
        rows = sink.rows(),
        "wrote CSV"
    );
    Ok(())
}

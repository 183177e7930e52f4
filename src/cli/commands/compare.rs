use crate::cli::args::Cli;
use crate::comparison::Comparator;
use crate::core::{CompareConfig, ProgressReporter};
use crate::dataset::CsvDatasetLoader;
use crate::report::render;
use crate::services::{ConsoleProgressReporter, NoOpProgressReporter};
use anyhow::{Context, Result};
use std::io::Write;

/// Compare two benchmark result files and write the SLOWER / FASTER report
pub fn execute_compare<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = cli.config()?;

    let reporter: Box<dyn ProgressReporter> = if cli.verbose {
        Box::new(ConsoleProgressReporter::new())
    } else {
        Box::new(NoOpProgressReporter::new())
    };
    let loader = CsvDatasetLoader::with_delimiter(config.delimiter());
    let comparator = Comparator::new(loader, config, reporter);

    let report = comparator.compare_files(&cli.reference_file, &cli.results_file)?;

    // Render fully before writing so a failure leaves stdout untouched
    let output = render(&report, comparator.config().output_format())?;
    out.write_all(output.as_bytes())
        .context("failed to write report")?;
    out.flush().context("failed to write report")?;

    Ok(())
}

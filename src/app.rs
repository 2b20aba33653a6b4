use crate::config::Config;
use crate::presentation::{self, Report};
use anyhow::{Context, Result};
use sales_summary_infra::DelimitedFileSource;
use sales_summary_usecase::SalesAggregator;
use std::io::Write;

/// Loads the configured file and writes the requested reports to `out`.
///
/// A missing or unreadable input is not an error here: it yields an empty
/// report, with the cause logged by the loader.
pub fn run(config: &Config, out: &mut dyn Write) -> Result<()> {
    let aggregator = SalesAggregator::load(&DelimitedFileSource::new(), &config.load_plan());
    if aggregator.is_empty() {
        log::warn!("no records available from {}", config.file.display());
    }

    let report = Report::build(&aggregator, config);
    presentation::render(&report, config.format, out).context("failed to emit report")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

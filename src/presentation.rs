// src/presentation.rs
use crate::config::Config;
use crate::options::{OutputFormat, ReportKind};
use comfy_table::{Table, presets::UTF8_FULL};
use sales_summary_domain::{AggregateMap, RegionTotal};
use sales_summary_shared_kernel::{ErrorContext, Result};
use sales_summary_usecase::SalesAggregator;
use serde::Serialize;
use std::io::Write;

/// Every requested report section, computed once for rendering.
#[derive(Debug, Serialize)]
pub struct Report {
    pub records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals_by_region: Option<AggregateMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_total: Option<RegionTotal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exports_by_month: Option<AggregateMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_imports: Option<RegionTotal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_rate_percentage: Option<AggregateMap>,
}

impl Report {
    pub fn build(aggregator: &SalesAggregator, config: &Config) -> Self {
        let region_total = config
            .region
            .as_deref()
            .filter(|_| config.wants(ReportKind::Region))
            .map(|name| RegionTotal {
                region: Some(name.to_uppercase()),
                total: aggregator.total_for_region(name),
            });

        Self {
            records: aggregator.len(),
            totals_by_region: config.wants(ReportKind::Totals).then(|| aggregator.totals_by_region()),
            region_total,
            exports_by_month: config.wants(ReportKind::Exports).then(|| aggregator.exports_by_month()),
            max_imports: config.wants(ReportKind::MaxImports).then(|| aggregator.region_with_max_imports()),
            zero_rate_percentage: config
                .wants(ReportKind::ZeroRate)
                .then(|| aggregator.zero_rate_percentage_by_region()),
        }
    }

    /// Sections as `(title, key column, value column, rows)`, in print order.
    fn sections(&self) -> Vec<(&'static str, &'static str, &'static str, Vec<(String, f64)>)> {
        let mut sections = Vec::new();
        if let Some(map) = &self.totals_by_region {
            sections.push(("Total sales by region", "region", "total_sales", rows(map)));
        }
        if let Some(total) = &self.region_total {
            sections.push(("Total sales for region", "region", "total_sales", single_row(total)));
        }
        if let Some(map) = &self.exports_by_month {
            sections.push(("Exports by month", "month", "exports", rows(map)));
        }
        if let Some(best) = &self.max_imports {
            sections.push(("Region with most imports", "region", "imports", single_row(best)));
        }
        if let Some(map) = &self.zero_rate_percentage {
            sections.push(("Zero-rate sales share by region", "region", "percent", rows(map)));
        }
        sections
    }
}

fn rows(map: &AggregateMap) -> Vec<(String, f64)> {
    map.iter().map(|(key, value)| (key.to_string(), *value)).collect()
}

fn single_row(total: &RegionTotal) -> Vec<(String, f64)> {
    let label = total.region.clone().unwrap_or_else(|| "(none)".to_string());
    vec![(label, total.total)]
}

pub fn render(report: &Report, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Json => render_json(report, out),
        OutputFormat::Csv => render_csv(report, out),
        OutputFormat::Md => render_markdown(report, out),
        OutputFormat::Table => render_table(report, out),
    }
}

fn render_json(report: &Report, out: &mut dyn Write) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serializing report")?;
    writeln!(out, "{json}").context("writing JSON report")
}

fn render_csv(report: &Report, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "section,key,value").context("writing CSV header")?;
    for (_, key_column, value_column, rows) in report.sections() {
        for (key, value) in rows {
            writeln!(out, "{key_column}:{value_column},{},{value:.2}", escape_csv(&key))
                .context("writing CSV row")?;
        }
    }
    Ok(())
}

fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n']) { format!("\"{}\"", field.replace('"', "\"\"")) } else { field.to_string() }
}

fn render_markdown(report: &Report, out: &mut dyn Write) -> Result<()> {
    for (title, key_column, value_column, rows) in report.sections() {
        writeln!(out, "### {title}\n").context("writing markdown")?;
        writeln!(out, "| {key_column} | {value_column} |\n|:---|---:|").context("writing markdown")?;
        for (key, value) in rows {
            writeln!(out, "| {} | {value:.2} |", key.replace('|', "\\|")).context("writing markdown")?;
        }
        writeln!(out).context("writing markdown")?;
    }
    Ok(())
}

fn render_table(report: &Report, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "sales_summary v{} · records={}", crate::VERSION, report.records).context("writing table")?;
    for (title, key_column, value_column, rows) in report.sections() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec![key_column, value_column]);
        for (key, value) in rows {
            table.add_row(vec![key, format!("{value:.2}")]);
        }
        writeln!(out, "\n{title}\n{table}").context("writing table")?;
    }
    Ok(())
}

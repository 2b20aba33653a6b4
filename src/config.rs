// src/config.rs
use crate::args::Args;
use crate::options::{OutputFormat, ReportKind};
use log::LevelFilter;
use sales_summary_ports::LoadPlan;
use sales_summary_shared_kernel::PresentationError;
use std::path::PathBuf;

/// Runtime configuration derived from CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub file: PathBuf,
    pub delimiter: u8,
    pub format: OutputFormat,
    /// Expanded, de-duplicated, in the order they will be printed.
    pub reports: Vec<ReportKind>,
    pub region: Option<String>,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn load_plan(&self) -> LoadPlan {
        LoadPlan::new(&self.file, self.delimiter)
    }

    pub fn wants(&self, report: ReportKind) -> bool {
        self.reports.contains(&report)
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let requested = &args.output.report;
        let region = args.output.region;

        if requested.contains(&ReportKind::Region) && region.is_none() {
            return Err(PresentationError::MissingArgument {
                argument: "--region".to_string(),
                context: "--report region".to_string(),
            });
        }

        let expand_all = requested.contains(&ReportKind::All);
        let reports = ReportKind::ALL
            .into_iter()
            .filter(|kind| {
                if expand_all {
                    // `all` only includes the single-region report when a region was given
                    *kind != ReportKind::Region || region.is_some()
                } else {
                    requested.contains(kind)
                }
            })
            .collect();

        let log_level = if args.behavior.verbose {
            LevelFilter::Debug
        } else if args.behavior.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Info
        };

        Ok(Self {
            file: args.file,
            delimiter: args.input.delimiter,
            format: args.output.format,
            reports,
            region,
            log_level,
        })
    }
}

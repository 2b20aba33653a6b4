#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod options;
pub mod parsers;
pub mod presentation;

use std::path::Path;

use sales_summary_infra::DelimitedFileSource;
use sales_summary_ports::LoadPlan;
pub use sales_summary_ports::DEFAULT_DELIMITER;
pub use sales_summary_usecase::SalesAggregator;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loads a delimited sales file into an aggregator.
///
/// Never fails: a missing or unreadable file gives an empty aggregator and a
/// log notice.
pub fn open(path: impl AsRef<Path>, delimiter: u8) -> SalesAggregator {
    SalesAggregator::load(&DelimitedFileSource::new(), &LoadPlan::new(path.as_ref(), delimiter))
}

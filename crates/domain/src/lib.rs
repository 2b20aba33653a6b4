#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;

pub use analytics::{AggregateMap, Aggregator, GroupedSums, RegionTotal, group_sum};
pub use model::{SalesRecord, SalesRecordBuilder, columns};

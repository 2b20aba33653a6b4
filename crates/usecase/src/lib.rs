//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`loader`]: turns a [`RecordSource`](sales_summary_ports::RecordSource) into
//!   normalized records, absorbing every load failure
//! - [`aggregator`]: holds the loaded records and answers the report queries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod aggregator;
pub mod loader;

pub use aggregator::SalesAggregator;
pub use loader::LoadRecords;

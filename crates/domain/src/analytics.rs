pub mod aggregate;
pub mod queries;

pub use aggregate::{AggregateMap, GroupedSums, group_sum};
pub use queries::{Aggregator, RegionTotal};

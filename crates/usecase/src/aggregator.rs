use sales_summary_domain::{AggregateMap, Aggregator, RegionTotal, SalesRecord};
use sales_summary_ports::{LoadPlan, RecordSource};

use crate::loader::LoadRecords;

/// Loaded sales records plus the report queries over them.
///
/// The record set is fixed at construction; build a new instance to pick up
/// changes in the source file.
#[derive(Debug, Clone, Default)]
pub struct SalesAggregator {
    records: Vec<SalesRecord>,
}

impl SalesAggregator {
    /// Loads `plan` through `source`. An unreadable source gives an empty aggregator.
    pub fn load(source: &dyn RecordSource, plan: &LoadPlan) -> Self {
        Self::from_records(LoadRecords::new(source).run(plan))
    }

    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` both for a file without data rows and for a failed load.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn totals_by_region(&self) -> AggregateMap {
        Aggregator::totals_by_region(&self.records)
    }

    pub fn total_for_region(&self, name: &str) -> f64 {
        Aggregator::total_for_region(&self.records, name)
    }

    pub fn exports_by_month(&self) -> AggregateMap {
        Aggregator::exports_by_month(&self.records)
    }

    pub fn region_with_max_imports(&self) -> RegionTotal {
        Aggregator::region_with_max_imports(&self.records)
    }

    pub fn zero_rate_percentage_by_region(&self) -> AggregateMap {
        Aggregator::zero_rate_percentage_by_region(&self.records)
    }
}

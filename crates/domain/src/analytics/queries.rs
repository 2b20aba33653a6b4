use std::ops::AddAssign;

use sales_summary_shared_kernel::{Amount, Region};
use serde::Serialize;

use super::aggregate::{AggregateMap, group_sum};
use crate::model::SalesRecord;

/// Region paired with an accumulated value.
///
/// `region: None` is the "no result" answer of a grouped maximum over no
/// eligible records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionTotal {
    pub region: Option<String>,
    pub total: f64,
}

impl RegionTotal {
    pub const fn none() -> Self {
        Self { region: None, total: 0.0 }
    }

    pub fn is_none(&self) -> bool {
        self.region.is_none()
    }
}

impl Default for RegionTotal {
    fn default() -> Self {
        Self::none()
    }
}

/// Zero-rate sales and total sales accumulated side by side.
#[derive(Debug, Clone, Copy, Default)]
struct RatioParts {
    zero_rate: Amount,
    total: Amount,
}

impl AddAssign for RatioParts {
    fn add_assign(&mut self, rhs: Self) {
        self.zero_rate += rhs.zero_rate;
        self.total += rhs.total;
    }
}

impl RatioParts {
    fn percentage(self) -> f64 {
        if self.total.is_zero() { 0.0 } else { self.zero_rate.value() / self.total.value() * 100.0 }
    }
}

/// Grouped reductions over a record slice. Every call rescans the records.
pub struct Aggregator;

impl Aggregator {
    /// Total sales per region. Blank and `UNKNOWN` regions are regular keys.
    pub fn totals_by_region(records: &[SalesRecord]) -> AggregateMap {
        group_sum(records, |r| Some(r.region().as_str()), SalesRecord::total_sales).map_values(f64::from)
    }

    /// Total sales of one region (case-insensitive), 0.0 when it never appears.
    pub fn total_for_region(records: &[SalesRecord], name: &str) -> f64 {
        let key = Region::normalize(name);
        Self::totals_by_region(records).get(&key).copied().unwrap_or(0.0)
    }

    /// Exports per month code; rows without a month are skipped.
    pub fn exports_by_month(records: &[SalesRecord]) -> AggregateMap {
        group_sum(records, SalesRecord::month, SalesRecord::exports).map_values(f64::from)
    }

    /// Region with the largest summed imports.
    ///
    /// Ties go to the region seen first in the input. Rows with a blank region
    /// do not take part.
    pub fn region_with_max_imports(records: &[SalesRecord]) -> RegionTotal {
        let imports = group_sum(records, named_region, SalesRecord::imports);
        let mut best: Option<(String, Amount)> = None;
        for (region, total) in imports {
            // strict comparison keeps the earliest region on ties
            if best.as_ref().is_none_or(|(_, current)| total > *current) {
                best = Some((region, total));
            }
        }
        best.map_or_else(RegionTotal::none, |(region, total)| RegionTotal { region: Some(region), total: total.value() })
    }

    /// Share of zero-rate sales in total sales, per region, in percent.
    ///
    /// A region whose total sales sum to 0.0 reports 0.0. Rows with a blank
    /// region do not take part.
    pub fn zero_rate_percentage_by_region(records: &[SalesRecord]) -> AggregateMap {
        group_sum(records, named_region, |r| RatioParts {
            zero_rate: r.zero_rate_net_sales(),
            total: r.total_sales(),
        })
        .map_values(RatioParts::percentage)
    }
}

// Region key for the max-imports and zero-rate queries. Unlike the totals
// query, a blank region is excluded here instead of forming its own group.
fn named_region(record: &SalesRecord) -> Option<&str> {
    let region = record.region();
    (!region.is_blank()).then(|| region.as_str())
}

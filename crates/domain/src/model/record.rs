use std::collections::BTreeMap;

use sales_summary_shared_kernel::{Amount, Region};
use serde::Serialize;

use super::columns;

/// One normalized row of the sales extract.
///
/// Built once while loading and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRecord {
    region: Region,
    total_sales: Amount,
    exports: Amount,
    imports: Amount,
    zero_rate_net_sales: Amount,
    /// Every column that is not interpreted, as raw text.
    extra: BTreeMap<String, String>,
}

impl SalesRecord {
    /// Normalizes one row given as `(column, cell)` pairs.
    ///
    /// Columns missing from the iterator count as absent. When a column name
    /// repeats, the last cell wins.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut extra: BTreeMap<String, String> =
            fields.into_iter().map(|(column, cell)| (column.to_string(), cell.to_string())).collect();

        let mut take = |column: &str| extra.remove(column);
        let region = Region::from_cell(take(columns::REGION).as_deref());
        let total_sales = Amount::parse_or_zero(take(columns::TOTAL_SALES).as_deref());
        let exports = Amount::parse_or_zero(take(columns::EXPORTS).as_deref());
        let imports = Amount::parse_or_zero(take(columns::IMPORTS).as_deref());
        let zero_rate_net_sales = Amount::parse_or_zero(take(columns::ZERO_RATE_NET_SALES).as_deref());

        Self { region, total_sales, exports, imports, zero_rate_net_sales, extra }
    }

    pub fn builder(region: &str) -> SalesRecordBuilder {
        SalesRecordBuilder::new(region)
    }

    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    #[inline]
    pub fn total_sales(&self) -> Amount {
        self.total_sales
    }

    #[inline]
    pub fn exports(&self) -> Amount {
        self.exports
    }

    #[inline]
    pub fn imports(&self) -> Amount {
        self.imports
    }

    #[inline]
    pub fn zero_rate_net_sales(&self) -> Amount {
        self.zero_rate_net_sales
    }

    /// Month code, `None` when the column is absent or the cell is empty.
    pub fn month(&self) -> Option<&str> {
        self.extra(columns::MONTH).filter(|m| !m.is_empty())
    }

    pub fn extra(&self, column: &str) -> Option<&str> {
        self.extra.get(column).map(String::as_str)
    }

    pub fn extra_fields(&self) -> &BTreeMap<String, String> {
        &self.extra
    }
}

/// Builder used by tests and benchmarks to assemble records directly.
#[derive(Debug, Clone)]
pub struct SalesRecordBuilder {
    record: SalesRecord,
}

impl SalesRecordBuilder {
    pub fn new(region: &str) -> Self {
        Self {
            record: SalesRecord {
                region: Region::new(region),
                total_sales: Amount::zero(),
                exports: Amount::zero(),
                imports: Amount::zero(),
                zero_rate_net_sales: Amount::zero(),
                extra: BTreeMap::new(),
            },
        }
    }

    pub fn total_sales(mut self, value: f64) -> Self {
        self.record.total_sales = Amount::new(value);
        self
    }

    pub fn exports(mut self, value: f64) -> Self {
        self.record.exports = Amount::new(value);
        self
    }

    pub fn imports(mut self, value: f64) -> Self {
        self.record.imports = Amount::new(value);
        self
    }

    pub fn zero_rate_net_sales(mut self, value: f64) -> Self {
        self.record.zero_rate_net_sales = Amount::new(value);
        self
    }

    pub fn month(self, month: &str) -> Self {
        self.extra(columns::MONTH, month)
    }

    pub fn extra(mut self, column: &str, value: &str) -> Self {
        self.record.extra.insert(column.to_string(), value.to_string());
        self
    }

    pub fn build(self) -> SalesRecord {
        self.record
    }
}

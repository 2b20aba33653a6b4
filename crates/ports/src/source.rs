// crates/ports/src/source.rs
use std::path::PathBuf;

use sales_summary_shared_kernel::InfraResult;
use serde::{Deserialize, Serialize};

/// Field separator of the SRI extracts.
pub const DEFAULT_DELIMITER: u8 = b'|';

/// Input parameters controlling one load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadPlan {
    pub path: PathBuf,
    pub delimiter: u8,
}

impl LoadPlan {
    pub fn new(path: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self { path: path.into(), delimiter }
    }
}

/// Header plus rows exactly as read, before any cleaning.
///
/// Rows may be shorter or longer than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// `(column, cell)` pairs of one row. Cells past the header are dropped and
    /// columns past the end of a short row are simply missing.
    pub fn fields<'a>(&'a self, row: &'a [String]) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.headers.iter().zip(row).map(|(column, cell)| (column.as_str(), cell.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Port for reading a delimited source.
pub trait RecordSource: Send + Sync {
    fn read(&self, plan: &LoadPlan) -> InfraResult<RawTable>;
}

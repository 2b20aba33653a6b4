use sales_summary_domain::SalesRecord;
use sales_summary_ports::{LoadPlan, RawTable, RecordSource};
use sales_summary_shared_kernel::InfrastructureError;

/// Loads and normalizes records. Never fails.
///
/// A missing source and an unreadable source both produce an empty vector;
/// the only trace of the difference is the log notice.
pub struct LoadRecords<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> LoadRecords<'a> {
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    pub fn run(&self, plan: &LoadPlan) -> Vec<SalesRecord> {
        match self.source.read(plan) {
            Ok(table) => {
                let records = normalize(&table);
                log::debug!("loaded {} records from {}", records.len(), plan.path.display());
                records
            }
            Err(InfrastructureError::SourceNotFound { path }) => {
                log::info!("file not found at {}; continuing with an empty dataset", path.display());
                Vec::new()
            }
            Err(err) => {
                log::error!("error while reading delimited file: {err}");
                Vec::new()
            }
        }
    }
}

fn normalize(table: &RawTable) -> Vec<SalesRecord> {
    table.rows.iter().map(|row| SalesRecord::from_fields(table.fields(row))).collect()
}

// crates/infra/src/delimited.rs
use std::{io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};
use sales_summary_ports::{LoadPlan, RawTable, RecordSource};
use sales_summary_shared_kernel::{InfraResult, InfrastructureError};

use crate::persistence::FileReader;

/// Reads a header row plus data rows from a delimited text file.
///
/// Rows of uneven length are accepted; interpreting them is left to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedFileSource;

impl DelimitedFileSource {
    pub fn new() -> Self {
        Self
    }

    /// Parses delimited text from any reader. `path` is only used in errors.
    pub fn read_from<R: Read>(reader: R, delimiter: u8, path: &Path) -> InfraResult<RawTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers().map_err(|e| csv_error(path, e))?;
        let headers = record_to_vec(headers);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| csv_error(path, e))?;
            rows.push(record_to_vec(&record));
        }

        log::debug!("read {} rows ({} columns) from {}", rows.len(), headers.len(), path.display());
        Ok(RawTable { headers, rows })
    }
}

impl RecordSource for DelimitedFileSource {
    fn read(&self, plan: &LoadPlan) -> InfraResult<RawTable> {
        let file = FileReader::open_buffered(&plan.path)?;
        Self::read_from(file, plan.delimiter, &plan.path)
    }
}

fn record_to_vec(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

fn csv_error(path: &Path, err: csv::Error) -> InfrastructureError {
    // the csv message already carries the record/line position
    let details = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => InfrastructureError::FileRead { path: path.to_path_buf(), source },
        _ => InfrastructureError::MalformedInput { path: path.to_path_buf(), details },
    }
}

use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

use sales_summary_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for opening source files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    ///
    /// A path that does not exist is reported as
    /// [`InfrastructureError::SourceNotFound`] rather than a generic I/O error.
    pub fn open(path: &Path) -> InfraResult<File> {
        if !path.exists() {
            return Err(InfrastructureError::SourceNotFound { path: path.to_path_buf() });
        }
        File::open(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }
}

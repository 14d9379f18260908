pub mod export_csv;
pub mod import_csv;

use super::*;
use log::debug;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

pub use export_csv::write_contacts_to_csv;
pub use import_csv::{CsvImport, RejectedRow, read_contacts_from_csv};

pub const CSV_HEADER: [&str; 3] = ["name", "email", "phone"];

/// Outcome of opening a user-supplied path, retrying once with a `.csv`
/// suffix when the path as typed cannot be opened.
#[derive(Debug)]
pub struct PathResolution<T> {
    pub attempted: Vec<PathBuf>,
    pub outcome: Result<T, io::Error>,
}

impl<T> PathResolution<T> {
    /// Path that was actually opened, if any.
    pub fn resolved(&self) -> Option<&Path> {
        match self.outcome {
            Ok(_) => self.attempted.last().map(PathBuf::as_path),
            Err(_) => None,
        }
    }

    pub fn into_result(self) -> Result<(PathBuf, T), AppError> {
        match self.outcome {
            Ok(handle) => {
                let path = self.attempted.last().cloned().unwrap_or_default();
                Ok((path, handle))
            }
            Err(e) => Err(AppError::FileAccess {
                attempted: self.attempted,
                reason: e.to_string(),
            }),
        }
    }
}

pub fn with_csv_suffix(path: &Path) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(".csv");
    PathBuf::from(raw)
}

pub fn open_with_csv_fallback<T, F>(path: &Path, mut open: F) -> PathResolution<T>
where
    F: FnMut(&Path) -> io::Result<T>,
{
    let mut attempted = vec![path.to_path_buf()];

    let outcome = match open(path) {
        Ok(handle) => Ok(handle),
        Err(first) => {
            let retry = with_csv_suffix(path);
            debug!("{:?} failed ({}), retrying as {:?}", path, first, retry);

            let outcome = open(&retry);
            attempted.push(retry);
            outcome
        }
    };

    PathResolution { attempted, outcome }
}

use core::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    Config(String),
    FileAccess {
        attempted: Vec<PathBuf>,
        reason: String,
    },
    ImportInterrupted {
        imported: u64,
        source: Box<AppError>,
    },
    ParseInt(std::num::ParseIntError),
    StorageUnavailable(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ParseInt(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Csv(e) => {
                write!(f, "CSV error: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "JSON error: {}", e)
            }
            AppError::Config(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            AppError::FileAccess { attempted, reason } => {
                let tried = attempted
                    .iter()
                    .map(|p| format!("{:?}", p))
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "Could not open file (tried {}): {}", tried, reason)
            }
            AppError::ImportInterrupted { imported, source } => {
                write!(
                    f,
                    "Import stopped after {} contacts were added: {}",
                    imported, source
                )
            }
            AppError::ParseInt(e) => {
                write!(f, "Invalid number format: {}", e)
            }
            AppError::StorageUnavailable(msg) => {
                write!(f, "Storage unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}

pub mod contact;
pub mod manager;

use crate::errors::AppError;
use crate::storage::{self, ContactUpdate, DocumentCollection, Filter, StorageMediums};

pub use contact::{Contact, parse_phone};
pub use manager::{Ack, ContactBook, DeleteResult, ExportResult, ImportResult, UpdateResult};

pub use crate::cli::{
    command::{Cli, Command},
    run::{Session, SessionState},
    run_app,
};
pub use crate::domain::{
    Ack, ContactBook, DeleteResult, ExportResult, ImportResult, UpdateResult,
    contact::{self, Contact, parse_phone},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactUpdate, Document, DocumentCollection, Field, Filter, StorageMediums,
    memory::MemCollection,
    port::{PathResolution, RejectedRow},
    stores::JsonCollection,
};

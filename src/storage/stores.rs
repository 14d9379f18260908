use super::*;

use log::{debug, warn};
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{Read, Write};

/// File-backed document collection.
///
/// The whole collection is read once on open and written back after every
/// mutation that changed something. A failed write rolls the in-memory state
/// back so both views stay in agreement.
pub struct JsonCollection {
    pub path: String,
    docs: MemCollection,
}

impl JsonCollection {
    pub fn open(path: &str) -> Result<Self, AppError> {
        let docs = load_documents(path)?;
        debug!("opened json collection {:?} ({} documents)", path, docs.len());

        Ok(Self {
            path: path.to_string(),
            docs: MemCollection::from_documents(docs),
        })
    }

    pub fn documents(&self) -> &[Document] {
        &self.docs.data
    }

    fn persist(&self) -> Result<(), AppError> {
        save_documents(&self.path, &self.docs.data).map_err(|e| {
            warn!("write to {:?} failed: {}", self.path, e);
            unavailable(&self.path, e)
        })
    }

    fn write_through<F>(&mut self, op: F) -> Result<bool, AppError>
    where
        F: FnOnce(&mut MemCollection) -> Result<bool, AppError>,
    {
        let snapshot = self.docs.data.clone();
        let changed = op(&mut self.docs)?;

        if changed && let Err(e) = self.persist() {
            self.docs.data = snapshot;
            return Err(e);
        }
        Ok(changed)
    }
}

impl DocumentCollection for JsonCollection {
    fn insert_one(&mut self, contact: Contact) -> Result<Uuid, AppError> {
        let id = self.docs.insert_one(contact)?;

        if let Err(e) = self.persist() {
            self.docs.data.pop();
            return Err(e);
        }
        Ok(id)
    }

    fn find(&self, filter: &Filter) -> Result<Vec<Contact>, AppError> {
        self.docs.find(filter)
    }

    fn update_one(&mut self, filter: &Filter, update: &ContactUpdate) -> Result<bool, AppError> {
        self.write_through(|docs| docs.update_one(filter, update))
    }

    fn delete_one(&mut self, filter: &Filter) -> Result<bool, AppError> {
        self.write_through(|docs| docs.delete_one(filter))
    }

    fn flush(&mut self) -> Result<(), AppError> {
        self.persist()
    }

    fn get_medium(&self) -> &str {
        "json"
    }
}

fn unavailable(path: &str, err: impl Display) -> AppError {
    AppError::StorageUnavailable(format!("{:?}: {}", path, err))
}

pub fn load_documents(path: &str) -> Result<Vec<Document>, AppError> {
    if !Path::new(path).exists() {
        return Ok(Vec::new());
    }

    let mut file = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|e| unavailable(path, e))?;

    let mut data = String::new();
    file.read_to_string(&mut data)
        .map_err(|e| unavailable(path, e))?;

    // serde_json will give an error if data is empty
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&data).map_err(|e| unavailable(path, e))
}

pub fn save_documents(path: &str, docs: &[Document]) -> Result<(), AppError> {
    create_file_parent(path)?;

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let json_docs = serde_json::to_string_pretty(docs)?;
    file.write_all(json_docs.as_bytes())?;
    file.flush()?;

    Ok(())
}

use super::*;
use crate::storage::MemCollection;
use crate::storage::port::{self, RejectedRow};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    pub id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResult {
    pub matched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    pub imported: u64,
    pub rejected: Vec<RejectedRow>,
    pub source: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub exported: u64,
    pub destination: PathBuf,
}

/// The contact store. Owns its collection handle for the whole session;
/// call [`ContactBook::close`] to flush it.
///
/// Names are not unique. `update` and `delete` act on the first contact with
/// the given name, in store order.
pub struct ContactBook {
    collection: Box<dyn DocumentCollection>,
}

impl ContactBook {
    pub fn open(medium: StorageMediums, path: &str) -> Result<Self, AppError> {
        let collection = storage::open_collection(medium, path)?;
        info!("contact book opened on {} storage", collection.get_medium());
        Ok(Self::with_collection(collection))
    }

    pub fn with_collection(collection: Box<dyn DocumentCollection>) -> Self {
        Self { collection }
    }

    pub fn in_memory() -> Self {
        Self::with_collection(Box::new(MemCollection::new()))
    }

    pub fn medium(&self) -> &str {
        self.collection.get_medium()
    }

    pub fn add(&mut self, name: &str, email: &str, phone: i64) -> Result<Ack, AppError> {
        self.insert(Contact::new(name, email, phone))
    }

    fn insert(&mut self, contact: Contact) -> Result<Ack, AppError> {
        let id = self.collection.insert_one(contact)?;
        debug!("inserted contact {}", id);
        Ok(Ack { id })
    }

    /// Contacts whose name or email equals `query` exactly.
    pub fn search(&self, query: &str) -> Result<Vec<Contact>, AppError> {
        self.collection.find(&Filter::name_or_email(query))
    }

    pub fn update(
        &mut self,
        name: &str,
        new_email: &str,
        new_phone: i64,
    ) -> Result<UpdateResult, AppError> {
        let update = ContactUpdate {
            email: new_email.to_string(),
            phone: new_phone,
        };
        let matched = self.collection.update_one(&Filter::name(name), &update)?;
        debug!("update {:?} matched={}", name, matched);
        Ok(UpdateResult { matched })
    }

    pub fn delete(&mut self, name: &str) -> Result<DeleteResult, AppError> {
        let matched = self.collection.delete_one(&Filter::name(name))?;
        debug!("delete {:?} matched={}", name, matched);
        Ok(DeleteResult { matched })
    }

    pub fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        self.collection.find(&Filter::All)
    }

    /// Appends every well-formed row of the CSV file, in file order.
    ///
    /// Malformed rows are skipped and listed in the result. A storage failure
    /// stops the import at the row that failed; contacts added before it stay
    /// and their count is carried by [`AppError::ImportInterrupted`].
    pub fn import_from(&mut self, path: &Path) -> Result<ImportResult, AppError> {
        let csv = port::read_contacts_from_csv(path)?;

        let mut imported: u64 = 0;
        for contact in csv.contacts {
            if let Err(e) = self.insert(contact) {
                warn!("import from {:?} stopped after {} contacts", csv.source, imported);
                return Err(AppError::ImportInterrupted {
                    imported,
                    source: Box::new(e),
                });
            }
            imported += 1;
        }

        Ok(ImportResult {
            imported,
            rejected: csv.rejected,
            source: csv.source,
        })
    }

    pub fn export_to(&self, path: &Path) -> Result<ExportResult, AppError> {
        let contacts = self.list_all()?;
        let (destination, exported) = port::write_contacts_to_csv(path, &contacts)?;

        Ok(ExportResult {
            exported,
            destination,
        })
    }

    pub fn close(mut self) -> Result<(), AppError> {
        self.collection.flush()?;
        info!("contact book closed");
        Ok(())
    }
}

pub mod memory;
pub mod port;
pub mod stores;

pub use memory::MemCollection;

use crate::prelude::{AppError, Contact};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

pub const DEFAULT_DB_PATH: &str = "./.instance/contacts.json";

/// The four primitives the contact book needs from a persistence medium.
///
/// `update_one` and `delete_one` act on the first document, in collection
/// order, that satisfies the filter.
pub trait DocumentCollection {
    fn insert_one(&mut self, contact: Contact) -> Result<Uuid, AppError>;

    fn find(&self, filter: &Filter) -> Result<Vec<Contact>, AppError>;

    fn update_one(&mut self, filter: &Filter, update: &ContactUpdate) -> Result<bool, AppError>;

    fn delete_one(&mut self, filter: &Filter) -> Result<bool, AppError>;

    fn flush(&mut self) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
}

impl Field {
    pub fn value_of<'a>(&self, contact: &'a Contact) -> &'a str {
        match self {
            Field::Name => &contact.name,
            Field::Email => &contact.email,
        }
    }
}

/// Exact-match query over contact documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Eq(Field, String),
    Or(Vec<Filter>),
}

impl Filter {
    pub fn name(value: &str) -> Self {
        Filter::Eq(Field::Name, value.to_string())
    }

    pub fn email(value: &str) -> Self {
        Filter::Eq(Field::Email, value.to_string())
    }

    pub fn name_or_email(query: &str) -> Self {
        Filter::Or(vec![Filter::name(query), Filter::email(query)])
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq(field, value) => field.value_of(contact) == value,
            Filter::Or(filters) => filters.iter().any(|f| f.matches(contact)),
        }
    }
}

/// Replacement values applied by `update_one`. The name is the match key and
/// is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactUpdate {
    pub email: String,
    pub phone: i64,
}

impl ContactUpdate {
    pub fn apply(&self, contact: &mut Contact) {
        contact.email = self.email.clone();
        contact.phone = self.phone;
    }
}

/// A stored contact together with the id the collection assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: Uuid,

    #[serde(flatten)]
    pub contact: Contact,
}

impl Document {
    pub fn new(contact: Contact) -> Self {
        Self {
            id: Uuid::new_v4(),
            contact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Config(format!(
                "'{}' is not a recognized storage medium (json, mem)",
                str
            ))),
        }
    }
}

pub fn open_collection(
    medium: StorageMediums,
    path: &str,
) -> Result<Box<dyn DocumentCollection>, AppError> {
    match medium {
        StorageMediums::Json => Ok(Box::new(stores::JsonCollection::open(path)?)),
        StorageMediums::Mem => Ok(Box::new(memory::MemCollection::new())),
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

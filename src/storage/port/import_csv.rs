use super::*;
use crate::domain::parse_phone;
use csv::ReaderBuilder;
use log::{info, warn};
use serde::Deserialize;
use std::fs::File;

#[derive(Debug, Deserialize)]
struct CsvRecord {
    name: String,
    email: String,
    phone: String,
}

/// A data row that could not become a contact. `row` counts data rows from 1,
/// the header line excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub row: usize,
    pub reason: String,
}

#[derive(Debug)]
pub struct CsvImport {
    pub source: PathBuf,
    pub contacts: Vec<Contact>,
    pub rejected: Vec<RejectedRow>,
}

fn open_readable(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::other(format!("{:?} is a directory", path)));
    }
    Ok(file)
}

/// Reads every row of a `name,email,phone` file.
///
/// Rows with missing fields or a non-integer phone are collected in
/// `rejected` and reading carries on. An I/O failure part way through aborts
/// the whole read. Name and email are kept exactly as written. The file is
/// closed before this returns.
pub fn read_contacts_from_csv(path: &Path) -> Result<CsvImport, AppError> {
    let (source, file) = open_with_csv_fallback(path, open_readable).into_result()?;

    let mut reader = ReaderBuilder::new().from_reader(file);

    let mut contacts: Vec<Contact> = Vec::new();
    let mut rejected: Vec<RejectedRow> = Vec::new();

    for (index, result) in reader.deserialize::<CsvRecord>().enumerate() {
        let row = index + 1;

        match result {
            Ok(record) => match parse_phone(&record.phone) {
                Ok(phone) => contacts.push(Contact::new(record.name, record.email, phone)),
                Err(e) => rejected.push(RejectedRow {
                    row,
                    reason: e.to_string(),
                }),
            },
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => rejected.push(RejectedRow {
                row,
                reason: e.to_string(),
            }),
        }
    }

    if !rejected.is_empty() {
        warn!("{} rows of {:?} were rejected", rejected.len(), source);
    }
    info!("read {} contacts from {:?}", contacts.len(), source);

    Ok(CsvImport {
        source,
        contacts,
        rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_rows_in_file_order() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("people.csv");
        fs::write(
            &path,
            "name,email,phone\n\
            Ada Lovelace,ada@x.com,111\n\
            \"Hopper, Grace\",grace@navy.mil,222\n",
        )?;

        let import = read_contacts_from_csv(&path)?;
        assert_eq!(import.source, path);
        assert_eq!(
            import.contacts,
            vec![
                Contact::new("Ada Lovelace", "ada@x.com", 111),
                Contact::new("Hopper, Grace", "grace@navy.mil", 222),
            ]
        );
        assert!(import.rejected.is_empty());
        Ok(())
    }

    #[test]
    fn rejects_malformed_rows_and_keeps_going() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("people.csv");
        fs::write(
            &path,
            "name,email,phone\n\
            Ada Lovelace,ada@x.com,111\n\
            Grace Hopper,grace@navy.mil\n\
            Alan Turing,alan@bletchley.uk,202-912-3345\n\
            Linus,linus@kernel.org,333\n",
        )?;

        let import = read_contacts_from_csv(&path)?;
        assert_eq!(import.contacts.len(), 2);
        assert_eq!(import.contacts[1].name, "Linus");

        let rows: Vec<usize> = import.rejected.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![2, 3]);
        Ok(())
    }

    #[test]
    fn keeps_surrounding_whitespace_in_text_fields() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("people.csv");
        fs::write(&path, "name,email,phone\n Ada ,ada@x.com , 111 \n")?;

        let import = read_contacts_from_csv(&path)?;
        assert_eq!(import.contacts, vec![Contact::new(" Ada ", "ada@x.com ", 111)]);
        assert!(import.rejected.is_empty());
        Ok(())
    }

    #[test]
    fn header_only_file_has_no_contacts() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("people.csv");
        fs::write(&path, "name,email,phone\n")?;

        let import = read_contacts_from_csv(&path)?;
        assert!(import.contacts.is_empty());
        assert!(import.rejected.is_empty());
        Ok(())
    }

    #[test]
    fn directory_is_not_a_source() -> Result<(), AppError> {
        let dir = tempdir()?;

        let result = read_contacts_from_csv(dir.path());
        assert!(matches!(result, Err(AppError::FileAccess { .. })));
        Ok(())
    }
}

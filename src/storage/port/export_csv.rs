use super::*;
use csv::WriterBuilder;
use log::info;
use std::fs::File;

/// Writes the header and then one row per contact, in the order given.
/// Returns the path actually written and the number of rows.
pub fn write_contacts_to_csv<'a, I>(path: &Path, contacts: I) -> Result<(PathBuf, u64), AppError>
where
    I: IntoIterator<Item = &'a Contact>,
{
    let (destination, file) = open_with_csv_fallback(path, |p| File::create(p)).into_result()?;

    // Header is written by hand so an empty collection still gets one.
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(CSV_HEADER)?;

    let mut counter: u64 = 0;

    for contact in contacts {
        writer.serialize(contact)?;
        counter += 1;
    }

    writer.flush()?;

    info!("wrote {} contacts to {:?}", counter, destination);
    Ok((destination, counter))
}

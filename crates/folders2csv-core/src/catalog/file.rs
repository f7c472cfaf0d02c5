use super::{CatalogEntry, DRIVE_HEADER, FOLDER_HEADER};
use crate::error::Error;
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::path::Path;

/// Read catalog rows in file order.
///
/// The first row is the header and is skipped. Rows with fewer than two
/// columns are dropped; columns past the second are ignored.
pub fn read_catalog(path: &Path) -> Result<Vec<CatalogEntry>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut entries = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if index == 0 || record.len() < 2 {
            continue;
        }
        entries.push(CatalogEntry::new(&record[0], &record[1]));
    }
    Ok(entries)
}

/// Overwrite `path` with the header row followed by `entries`.
pub fn write_catalog(path: &Path, entries: &[CatalogEntry]) -> Result<(), Error> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)?;

    writer.write_record([FOLDER_HEADER, DRIVE_HEADER])?;
    for entry in entries {
        writer.write_record([entry.folder_name.as_str(), entry.drive_name.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

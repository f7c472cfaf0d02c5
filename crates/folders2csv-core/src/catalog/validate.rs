use crate::error::Error;
use crate::outcome::Outcome;
use csv::ReaderBuilder;
use std::path::Path;

const FOLDER_SYNONYMS: &[&str] = &["folder name", "folder"];
const DRIVE_SYNONYMS: &[&str] = &["drive name", "drive"];

/// Check that `path` can serve as a catalog.
///
/// A missing file is valid because it will be created on the next scan. The
/// count is the number of existing data rows with at least two columns.
pub fn validate_catalog(path: &str) -> Outcome {
    if path.trim().is_empty() {
        return Outcome::failed(Error::NoDestination.to_string());
    }

    let path = Path::new(path);
    if !path.exists() {
        return Outcome::ok("New CSV file will be created", 0);
    }

    match inspect_catalog(path) {
        Ok(rows) => Outcome::ok(format!("Valid CSV file with {} existing entries", rows), rows),
        Err(err @ Error::InvalidFormat(_)) => Outcome::failed(err.to_string()),
        Err(err) => Outcome::failed(format!("Error reading CSV file: {}", err)),
    }
}

/// Verify the header row and count the data rows of an existing catalog.
pub fn inspect_catalog(path: &Path) -> Result<usize, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(Error::InvalidFormat("missing or incorrect header".to_string())),
    };
    if header.len() < 2 {
        return Err(Error::InvalidFormat("missing or incorrect header".to_string()));
    }

    let folder = header[0].to_lowercase();
    let drive = header[1].to_lowercase();
    if !FOLDER_SYNONYMS.contains(&folder.as_str()) || !DRIVE_SYNONYMS.contains(&drive.as_str()) {
        return Err(Error::InvalidFormat("incorrect column headers".to_string()));
    }

    let mut rows = 0;
    for record in records {
        if record?.len() >= 2 {
            rows += 1;
        }
    }
    Ok(rows)
}

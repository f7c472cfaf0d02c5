use crate::catalog::CatalogEntry;
use crate::drive_name;
use std::fs;
use std::io;
use std::path::Path;

/// Pair every visible child of a mastering folder with the volume's canonical name.
///
/// Children are returned sorted by name. Entries starting with `.` are hidden
/// and skipped. A mastering folder that does not exist contributes nothing,
/// the same as an empty one.
pub fn list_subfolders(mastering_folder: &Path, volume_name: &str) -> io::Result<Vec<CatalogEntry>> {
    if !mastering_folder.exists() {
        return Ok(Vec::new());
    }

    let drive = drive_name::display_name(volume_name);
    let mut names = Vec::new();
    for entry in fs::read_dir(mastering_folder)? {
        let entry = entry.map_err(|err| {
            io::Error::new(
                err.kind(),
                format!(
                    "Error reading entry in directory {}: {}",
                    mastering_folder.display(),
                    err
                ),
            )
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }
    names.sort();

    Ok(names
        .into_iter()
        .map(|folder| CatalogEntry::new(folder, drive.clone()))
        .collect())
}

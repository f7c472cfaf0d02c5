use super::CatalogEntry;

/// Entries whose folder or drive name contains `term`, ignoring case.
/// A blank term matches everything.
pub fn search<'a>(entries: &'a [CatalogEntry], term: &str) -> Vec<&'a CatalogEntry> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return entries.iter().collect();
    }

    entries
        .iter()
        .filter(|entry| {
            entry.folder_name.to_lowercase().contains(&needle)
                || entry.drive_name.to_lowercase().contains(&needle)
        })
        .collect()
}

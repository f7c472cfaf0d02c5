use super::{sort_by_drive, CatalogEntry};
use ahash::AHashSet;

#[derive(Debug)]
pub struct Merged {
    pub entries: Vec<CatalogEntry>,
    pub new_entries: usize,
}

/// Union of an existing catalog and a scan batch.
///
/// Existing rows come first, then batch rows not already present; repeated
/// pairs keep their first occurrence. The result is sorted by drive.
pub fn merge(existing: Vec<CatalogEntry>, batch: &[CatalogEntry]) -> Merged {
    let mut seen: AHashSet<CatalogEntry> = AHashSet::with_capacity(existing.len() + batch.len());
    let mut entries = Vec::with_capacity(existing.len() + batch.len());

    for entry in existing {
        if seen.insert(entry.clone()) {
            entries.push(entry);
        }
    }

    let mut new_entries = 0;
    for entry in batch {
        if seen.insert(entry.clone()) {
            entries.push(entry.clone());
            new_entries += 1;
        }
    }

    sort_by_drive(&mut entries);
    Merged {
        entries,
        new_entries,
    }
}

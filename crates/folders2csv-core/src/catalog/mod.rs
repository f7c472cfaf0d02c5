pub mod file;
pub mod merge;
pub mod search;
pub mod validate;

pub use file::{read_catalog, write_catalog};
pub use merge::{merge, Merged};
pub use search::search;
pub use validate::validate_catalog;

pub const FOLDER_HEADER: &str = "Folder Name";
pub const DRIVE_HEADER: &str = "Drive Name";

/// One catalogued folder and the canonical drive it lives on.
///
/// Identity is the pair; the same folder name may appear on several drives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    pub folder_name: String,
    pub drive_name: String,
}

impl CatalogEntry {
    pub fn new(folder_name: impl Into<String>, drive_name: impl Into<String>) -> Self {
        Self {
            folder_name: folder_name.into(),
            drive_name: drive_name.into(),
        }
    }
}

/// Stable sort by drive name; entries on the same drive keep their order.
pub fn sort_by_drive(entries: &mut [CatalogEntry]) {
    entries.sort_by(|a, b| a.drive_name.cmp(&b.drive_name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_drive_is_stable() {
        let mut entries = vec![
            CatalogEntry::new("Zeta", "Audio Archive 2"),
            CatalogEntry::new("Beta", "Audio Archive 1"),
            CatalogEntry::new("Alpha", "Audio Archive 2"),
            CatalogEntry::new("Gamma", "Audio Archive 1"),
        ];
        sort_by_drive(&mut entries);
        let folders: Vec<&str> = entries.iter().map(|e| e.folder_name.as_str()).collect();
        assert_eq!(folders, vec!["Beta", "Gamma", "Zeta", "Alpha"]);
    }

    #[test]
    fn test_sort_is_lexicographic_on_drive_name() {
        let mut entries = vec![
            CatalogEntry::new("a", "Audio Archive 2"),
            CatalogEntry::new("b", "Audio Archive 10"),
        ];
        sort_by_drive(&mut entries);
        assert_eq!(entries[0].drive_name, "Audio Archive 10");
    }
}

use std::fs;
use tempfile::tempdir;

use folders2csv_core::scanner::{list_candidate_drives, list_subfolders, locate_mastering_folder};
use folders2csv_core::{AppConfig, Backend, CatalogEntry};

#[test]
fn test_candidate_drives_keep_raw_names() {
    let tmp = tempdir().unwrap();
    for name in ["Audio Archive 01", "Macintosh HD", "Audio Archive 2", "Backup Disk"] {
        fs::create_dir_all(tmp.path().join(name)).unwrap();
    }

    let drives = list_candidate_drives(tmp.path());
    assert_eq!(drives, vec!["Audio Archive 01", "Audio Archive 2"]);
}

#[test]
fn test_deny_listed_volume_is_excluded_even_when_named_like_archive() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join(".timemachine")).unwrap();
    fs::create_dir_all(tmp.path().join("Macintosh HD - Data")).unwrap();
    fs::create_dir_all(tmp.path().join("Audio Archive 5")).unwrap();

    assert_eq!(list_candidate_drives(tmp.path()), vec!["Audio Archive 5"]);
}

#[test]
fn test_locate_mastering_folder() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("Audio Archive 1").join("mastering")).unwrap();
    fs::create_dir_all(tmp.path().join("Audio Archive 2")).unwrap();

    assert_eq!(
        locate_mastering_folder(tmp.path(), "Audio Archive 1"),
        Some(tmp.path().join("Audio Archive 1").join("mastering"))
    );
    assert_eq!(locate_mastering_folder(tmp.path(), "Audio Archive 2"), None);
    assert_eq!(locate_mastering_folder(tmp.path(), "Audio Archive 3"), None);
}

#[test]
fn test_list_subfolders_skips_hidden_entries() {
    let tmp = tempdir().unwrap();
    let mastering = tmp.path().join("mastering");
    fs::create_dir_all(mastering.join("SessionB")).unwrap();
    fs::create_dir_all(mastering.join("SessionA")).unwrap();
    fs::create_dir_all(mastering.join(".hidden")).unwrap();
    fs::write(mastering.join(".DS_Store"), "").unwrap();

    let entries = list_subfolders(&mastering, "Audio Archive 007").unwrap();
    assert_eq!(
        entries,
        vec![
            CatalogEntry::new("SessionA", "Audio Archive 7"),
            CatalogEntry::new("SessionB", "Audio Archive 7"),
        ]
    );
}

#[test]
fn test_list_subfolders_of_missing_folder_is_empty() {
    let tmp = tempdir().unwrap();
    let entries = list_subfolders(&tmp.path().join("nope"), "Audio Archive 1").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_drive_info_statuses() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("Audio Archive 01").join("mastering").join("A")).unwrap();
    fs::create_dir_all(tmp.path().join("Audio Archive 2").join("mastering")).unwrap();
    fs::create_dir_all(tmp.path().join("Audio Archive 3")).unwrap();
    let backend = Backend::new(AppConfig::with_volumes_root(
        tmp.path().to_string_lossy().into_owned(),
    ));

    let ready = backend.get_drive_info("Audio Archive 01");
    assert_eq!(ready.canonical_name, "Audio Archive 1");
    assert_eq!(ready.folder_count, 1);
    assert_eq!(ready.status, "Ready");
    assert_eq!(
        ready.mastering_folder,
        Some(tmp.path().join("Audio Archive 01").join("mastering"))
    );

    let empty = backend.get_drive_info("Audio Archive 2");
    assert_eq!(empty.folder_count, 0);
    assert_eq!(empty.status, "No folders found");
    assert!(empty.mastering_folder.is_some());

    let missing = backend.get_drive_info("Audio Archive 3");
    assert_eq!(missing.status, "No mastering folder found");
    assert_eq!(missing.mastering_folder, None);

    let unknown = backend.get_drive_info("Backup Disk");
    assert_eq!(unknown.canonical_name, "Unknown Drive");
    assert_eq!(unknown.folder_count, 0);
}

#[test]
fn test_validate_csv_file_cases() {
    let tmp = tempdir().unwrap();
    let backend = Backend::new(AppConfig::with_volumes_root(
        tmp.path().to_string_lossy().into_owned(),
    ));

    let missing = tmp.path().join("missing.csv");
    let outcome = backend.validate_csv_file(missing.to_str().unwrap());
    assert!(outcome.success);
    assert_eq!(outcome.count, 0);
    assert_eq!(outcome.message, "New CSV file will be created");

    let short_names = tmp.path().join("short.csv");
    fs::write(&short_names, "folder,DRIVE\nA,Audio Archive 1\nB,Audio Archive 2\n").unwrap();
    let outcome = backend.validate_csv_file(short_names.to_str().unwrap());
    assert!(outcome.success);
    assert_eq!(outcome.count, 2);

    let wrong = tmp.path().join("wrong.csv");
    fs::write(&wrong, "Name,Path\nA,B\n").unwrap();
    let outcome = backend.validate_csv_file(wrong.to_str().unwrap());
    assert!(!outcome.success);
    assert_eq!(outcome.message, "Invalid CSV format: incorrect column headers");
}

#[test]
fn test_get_csv_contents_of_missing_file_is_empty() {
    let tmp = tempdir().unwrap();
    let backend = Backend::new(AppConfig::with_volumes_root(
        tmp.path().to_string_lossy().into_owned(),
    ));
    assert!(backend
        .get_csv_contents(tmp.path().join("none.csv").to_str().unwrap())
        .is_empty());
}

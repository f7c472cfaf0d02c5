use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn create_volumes(root: &Path) {
    let archive_01 = root.join("Audio Archive 01").join("mastering");
    fs::create_dir_all(archive_01.join("SessionA")).expect("mkdir SessionA");
    fs::create_dir_all(archive_01.join("SessionB")).expect("mkdir SessionB");
    fs::write(archive_01.join(".DS_Store"), "").expect("write hidden");
    fs::create_dir_all(root.join("Audio Archive 2")).expect("mkdir archive 2");
    fs::create_dir_all(root.join("Macintosh HD")).expect("mkdir system volume");
}

fn folders2csv(tmp: &TempDir) -> assert_cmd::Command {
    let volumes = tmp.path().join("Volumes");
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("folders2csv");
    cmd.current_dir(tmp.path())
        .env("FOLDERS2CSV_VOLUMES_ROOT", &volumes)
        .env("FOLDERS2CSV_CATALOG_PATH", tmp.path().join("catalog.csv"))
        .env("LOG_FILE_PATH", tmp.path().join("logs").join("test.log"))
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0");
    cmd
}

fn setup() -> TempDir {
    let tmp = tempdir().expect("tempdir");
    create_volumes(&tmp.path().join("Volumes"));
    tmp
}

#[test]
fn drives_lists_archive_volumes_only() {
    let tmp = setup();

    folders2csv(&tmp)
        .arg("drives")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audio Archive 1"))
        .stdout(predicate::str::contains("(2 folders)"))
        .stdout(predicate::str::contains("Audio Archive 2"))
        .stdout(predicate::str::contains("Macintosh HD").not());
}

#[test]
fn scan_creates_catalog_at_configured_path() {
    let tmp = setup();

    folders2csv(&tmp)
        .args(["scan", "Audio Archive 01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV created with 2 folders."));

    let content = fs::read_to_string(tmp.path().join("catalog.csv")).expect("read catalog");
    assert_eq!(
        content,
        "Folder Name,Drive Name\nSessionA,Audio Archive 1\nSessionB,Audio Archive 1\n"
    );
}

#[test]
fn scan_all_twice_reports_no_new_folders() {
    let tmp = setup();
    let csv = tmp.path().join("explicit.csv");

    folders2csv(&tmp)
        .args(["scan", "--all", "--csv"])
        .arg(&csv)
        .assert()
        .success();

    folders2csv(&tmp)
        .args(["scan", "--all", "--csv"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("No new folders found. CSV contains 2 folders."));
}

#[test]
fn scan_without_folders_fails_and_writes_nothing() {
    let tmp = setup();

    folders2csv(&tmp)
        .args(["scan", "Audio Archive 2"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("No data found to save"));

    assert!(!tmp.path().join("catalog.csv").exists());
}

#[test]
fn scan_refuses_invalid_catalog() {
    let tmp = setup();
    fs::write(tmp.path().join("catalog.csv"), "Name,Path\n").expect("write catalog");

    folders2csv(&tmp)
        .args(["scan", "Audio Archive 01"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("incorrect column headers"));
}

#[test]
fn validate_missing_catalog_succeeds() {
    let tmp = setup();

    folders2csv(&tmp)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("New CSV file will be created"));
}

#[test]
fn show_filters_rows_by_search_term() {
    let tmp = setup();
    fs::write(
        tmp.path().join("catalog.csv"),
        "Folder Name,Drive Name\nSmith Wedding,Audio Archive 1\nJones Session,Audio Archive 2\n",
    )
    .expect("write catalog");

    folders2csv(&tmp)
        .args(["show", "--search", "smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smith Wedding"))
        .stdout(predicate::str::contains("Jones Session").not())
        .stdout(predicate::str::contains("1 of 2 entries"));
}

#[test]
fn info_reports_missing_mastering_folder() {
    let tmp = setup();

    folders2csv(&tmp)
        .args(["info", "Audio Archive 2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No mastering folder found"));
}

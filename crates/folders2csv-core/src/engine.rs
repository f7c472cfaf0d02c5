use crate::catalog::{self, CatalogEntry};
use crate::config::AppConfig;
use crate::drive_name;
use crate::error::Error;
use crate::progress::ProgressReporter;
use crate::scanner;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct CatalogEngine {
    config: AppConfig,
}

#[derive(Debug)]
pub struct ReconcileResult {
    /// No catalog existed at the destination before this run.
    pub created: bool,
    pub scanned_entries: usize,
    pub new_entries: usize,
    pub total_entries: usize,
    pub scan_duration: Duration,
    pub write_duration: Duration,
}

impl ReconcileResult {
    pub fn summary(&self) -> String {
        if self.created {
            format!("CSV created with {} folders.", self.total_entries)
        } else if self.new_entries > 0 {
            format!(
                "CSV updated with {} new folders. Total: {} folders.",
                self.new_entries, self.total_entries
            )
        } else {
            format!(
                "No new folders found. CSV contains {} folders.",
                self.total_entries
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriveInfo {
    pub drive_name: String,
    pub canonical_name: String,
    pub mastering_folder: Option<PathBuf>,
    pub folder_count: usize,
    pub status: String,
}

impl CatalogEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn volumes_root(&self) -> &Path {
        self.config.volumes_root()
    }

    pub fn available_drives(&self) -> Vec<String> {
        scanner::list_candidate_drives(self.volumes_root())
    }

    /// Collect catalog entries from each selected volume, in selection order.
    ///
    /// Volumes that do not follow the naming convention, have no mastering
    /// folder, or have an empty one contribute nothing.
    pub fn scan_batch(
        &self,
        selected: &[String],
        reporter: &dyn ProgressReporter,
    ) -> Result<Vec<CatalogEntry>, Error> {
        let mut batch = Vec::new();

        for volume in selected {
            reporter.on_drive_start(volume);

            if drive_name::normalize(volume).is_none() {
                warn!("Skipping unrecognized drive '{}'", volume);
                reporter.on_drive_unrecognized(volume);
                continue;
            }

            let Some(mastering) = scanner::locate_mastering_folder(self.volumes_root(), volume)
            else {
                reporter.on_drive_missing_mastering(volume);
                continue;
            };

            let entries = scanner::list_subfolders(&mastering, volume)?;
            if entries.is_empty() {
                reporter.on_drive_empty(volume);
            } else {
                reporter.on_drive_scanned(volume, entries.len());
                batch.extend(entries);
            }
        }

        Ok(batch)
    }

    /// Scan the selected volumes and merge the result into the catalog at `destination`.
    ///
    /// Nothing is written when the scan finds no folders. An existing catalog
    /// that cannot be read is treated as empty and overwritten.
    pub fn reconcile(
        &self,
        selected: &[String],
        destination: &str,
        reporter: &dyn ProgressReporter,
    ) -> Result<ReconcileResult, Error> {
        if destination.trim().is_empty() {
            return Err(Error::NoDestination);
        }
        if selected.is_empty() {
            return Err(Error::NoDrivesSelected);
        }
        let destination = Path::new(destination);

        info!("Scanning {} drives...", selected.len());
        let scan_start = Instant::now();
        let mut batch = self.scan_batch(selected, reporter)?;
        let scan_duration = scan_start.elapsed();
        if batch.is_empty() {
            return Err(Error::NothingToSave);
        }
        catalog::sort_by_drive(&mut batch);
        debug!(
            "Scan completed in {:.2}s — {} folders",
            scan_duration.as_secs_f64(),
            batch.len()
        );

        let file_exists = destination.exists();
        let existing = if file_exists {
            match catalog::read_catalog(destination) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(
                        "Could not read existing CSV file {}: {}",
                        destination.display(),
                        err
                    );
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let merged = catalog::merge(existing, &batch);

        reporter.on_write_start();
        let write_start = Instant::now();
        catalog::write_catalog(destination, &merged.entries)?;
        let write_duration = write_start.elapsed();
        let destination_display = destination.display().to_string();
        reporter.on_write_complete(merged.entries.len(), &destination_display);
        debug!(
            "CSV write completed in {:.2}s — {} rows, {} new",
            write_duration.as_secs_f64(),
            merged.entries.len(),
            merged.new_entries
        );

        Ok(ReconcileResult {
            created: !file_exists,
            scanned_entries: batch.len(),
            new_entries: merged.new_entries,
            total_entries: merged.entries.len(),
            scan_duration,
            write_duration,
        })
    }

    /// Describe a volume for display. Failures end up in `status`.
    pub fn drive_info(&self, volume: &str) -> DriveInfo {
        let canonical_name = drive_name::display_name(volume);

        let Some(mastering) = scanner::locate_mastering_folder(self.volumes_root(), volume) else {
            return DriveInfo {
                drive_name: volume.to_string(),
                canonical_name,
                mastering_folder: None,
                folder_count: 0,
                status: "No mastering folder found".to_string(),
            };
        };

        match scanner::list_subfolders(&mastering, volume) {
            Ok(entries) => DriveInfo {
                drive_name: volume.to_string(),
                canonical_name,
                mastering_folder: Some(mastering),
                folder_count: entries.len(),
                status: if entries.is_empty() {
                    "No folders found".to_string()
                } else {
                    "Ready".to_string()
                },
            },
            Err(err) => DriveInfo {
                drive_name: volume.to_string(),
                canonical_name,
                mastering_folder: None,
                folder_count: 0,
                status: format!("Error: {}", err),
            },
        }
    }
}

//! Front-end facing operations.
//!
//! Nothing here returns an error or panics: every failure is folded into an
//! [`Outcome`], a degraded [`DriveInfo`], or an empty list, so a UI can branch
//! on the success flag alone.

use crate::catalog::{self, CatalogEntry};
use crate::config::AppConfig;
use crate::engine::{CatalogEngine, DriveInfo};
use crate::error::Error;
use crate::outcome::Outcome;
use crate::progress::ProgressReporter;
use std::path::Path;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct Backend {
    engine: CatalogEngine,
}

impl Backend {
    pub fn new(config: AppConfig) -> Self {
        Self {
            engine: CatalogEngine::new(config),
        }
    }

    pub fn engine(&self) -> &CatalogEngine {
        &self.engine
    }

    pub fn get_available_drives(&self) -> Vec<String> {
        self.engine.available_drives()
    }

    /// Scan `selected_drives` and create or update the catalog at `csv_path`.
    ///
    /// The count is the total number of rows in the catalog after the merge.
    pub fn process_drives_to_csv(
        &self,
        selected_drives: &[String],
        csv_path: &str,
        reporter: &dyn ProgressReporter,
    ) -> Outcome {
        match self.engine.reconcile(selected_drives, csv_path, reporter) {
            Ok(result) => {
                let message = result.summary();
                info!("{}", message);
                Outcome::ok(message, result.total_entries)
            }
            Err(err) if err.is_configuration() => Outcome::failed(err.to_string()),
            Err(Error::NothingToSave) => Outcome::failed(Error::NothingToSave.to_string()),
            Err(err) => {
                let message = format!("Error processing drives: {}", err);
                error!("{}", message);
                Outcome::failed(message)
            }
        }
    }

    pub fn validate_csv_file(&self, csv_path: &str) -> Outcome {
        catalog::validate_catalog(csv_path)
    }

    pub fn get_drive_info(&self, drive_name: &str) -> DriveInfo {
        self.engine.drive_info(drive_name)
    }

    /// Catalog rows in file order; empty when the file is missing or unreadable.
    pub fn get_csv_contents(&self, csv_path: &str) -> Vec<CatalogEntry> {
        let path = Path::new(csv_path);
        if csv_path.trim().is_empty() || !path.exists() {
            return Vec::new();
        }
        match catalog::read_catalog(path) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Could not read CSV file {}: {}", path.display(), err);
                Vec::new()
            }
        }
    }

    pub fn search_csv_contents(&self, csv_path: &str, term: &str) -> Vec<CatalogEntry> {
        let entries = self.get_csv_contents(csv_path);
        catalog::search(&entries, term).into_iter().cloned().collect()
    }
}

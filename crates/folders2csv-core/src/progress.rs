/// Trait for reporting scan and merge progress.
///
/// The typed hooks default to forwarding a human-readable line to
/// `on_status`, so a sink that only displays text implements that one method.
/// The CLI overrides the typed hooks to drive a spinner.
pub trait ProgressReporter: Send + Sync {
    fn on_status(&self, _message: &str) {}

    fn on_drive_start(&self, volume: &str) {
        self.on_status(&format!("Processing drive: {}", volume));
    }

    fn on_drive_scanned(&self, volume: &str, folders: usize) {
        self.on_status(&format!("Found {} folders in {}", folders, volume));
    }

    fn on_drive_empty(&self, volume: &str) {
        self.on_status(&format!("No folders found in {}", volume));
    }

    fn on_drive_missing_mastering(&self, volume: &str) {
        self.on_status(&format!("No mastering folder found for drive: {}", volume));
    }

    fn on_drive_unrecognized(&self, volume: &str) {
        self.on_status(&format!("Skipping unrecognized drive: {}", volume));
    }

    fn on_write_start(&self) {
        self.on_status("Saving to CSV file...");
    }

    fn on_write_complete(&self, rows: usize, path: &str) {
        self.on_status(&format!("Saved {} folders to {}", rows, path));
    }
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}

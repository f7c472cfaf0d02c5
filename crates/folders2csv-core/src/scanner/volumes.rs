use crate::drive_name;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Operating system volumes that are never archive drives.
pub const SYSTEM_VOLUMES: &[&str] = &["Macintosh HD", "Macintosh HD - Data", ".timemachine"];

/// Subdirectory on each archive drive holding the folders to catalog.
pub const MASTERING_DIR_NAME: &str = "mastering";

/// Names of every entry directly under the volumes root, sorted.
pub fn list_volume_names(volumes_root: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(volumes_root)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

pub fn is_candidate(volume_name: &str) -> bool {
    !SYSTEM_VOLUMES.contains(&volume_name) && drive_name::normalize(volume_name).is_some()
}

/// Raw names of mounted volumes that look like archive drives.
///
/// A volumes root that cannot be listed yields no drives; the failure is
/// logged and never propagated.
pub fn list_candidate_drives(volumes_root: &Path) -> Vec<String> {
    let names = match list_volume_names(volumes_root) {
        Ok(names) => names,
        Err(err) => {
            if err.kind() == io::ErrorKind::PermissionDenied {
                error!(
                    "Access denied reading volumes in {}: {}",
                    volumes_root.display(),
                    err
                );
            } else {
                warn!("Error getting drives from {}: {}", volumes_root.display(), err);
            }
            return Vec::new();
        }
    };

    names
        .into_iter()
        .filter(|name| {
            let keep = is_candidate(name);
            if !keep {
                debug!("Ignoring volume '{}'", name);
            }
            keep
        })
        .collect()
}

/// Path of the mastering directory on a volume, if it exists.
pub fn locate_mastering_folder(volumes_root: &Path, volume_name: &str) -> Option<PathBuf> {
    let mastering = volumes_root.join(volume_name).join(MASTERING_DIR_NAME);
    if mastering.is_dir() {
        Some(mastering)
    } else {
        None
    }
}

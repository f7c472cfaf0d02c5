use crate::error::Error;
use config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_VOLUMES_ROOT: &str = "/Volumes";
pub const DEFAULT_CATALOG_FILE_NAME: &str = "mastering_folders.csv";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub volumes_root: String,
    pub catalog_path: String,
}

impl AppConfig {
    pub fn with_volumes_root(volumes_root: impl Into<String>) -> Self {
        Self {
            volumes_root: volumes_root.into(),
            catalog_path: default_catalog_path().to_string_lossy().into_owned(),
        }
    }

    pub fn volumes_root(&self) -> &Path {
        Path::new(&self.volumes_root)
    }

    /// An explicit, non-blank path wins over the configured catalog.
    pub fn catalog_path_or(&self, explicit: Option<&str>) -> String {
        match explicit {
            Some(path) if !path.trim().is_empty() => path.to_string(),
            _ => self.catalog_path.clone(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_volumes_root(DEFAULT_VOLUMES_ROOT)
    }
}

/// `Config.*` in the working directory, then `FOLDERS2CSV_*` environment variables.
pub fn load_configuration() -> Result<AppConfig, Error> {
    let builder = Config::builder()
        .set_default("volumes_root", DEFAULT_VOLUMES_ROOT)?
        .set_default(
            "catalog_path",
            default_catalog_path().to_string_lossy().into_owned(),
        )?
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(Environment::with_prefix("FOLDERS2CSV"))
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}

pub fn default_catalog_path() -> PathBuf {
    catalog_path_in(
        dirs::download_dir().or_else(|| dirs::home_dir().map(|home| home.join("Downloads"))),
    )
}

fn catalog_path_in(downloads: Option<PathBuf>) -> PathBuf {
    match downloads {
        Some(dir) => dir.join(DEFAULT_CATALOG_FILE_NAME),
        None => PathBuf::from(DEFAULT_CATALOG_FILE_NAME),
    }
}

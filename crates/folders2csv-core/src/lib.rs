pub mod backend;
pub mod catalog;
pub mod config;
pub mod drive_name;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod progress;
pub mod scanner;

pub use crate::backend::Backend;
pub use crate::catalog::CatalogEntry;
pub use crate::config::AppConfig;
pub use crate::drive_name::{normalize, DriveId};
pub use crate::engine::{CatalogEngine, DriveInfo, ReconcileResult};
pub use crate::error::Error;
pub use crate::outcome::Outcome;
pub use crate::progress::{ProgressReporter, SilentReporter};

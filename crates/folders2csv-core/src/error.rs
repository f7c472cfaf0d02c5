use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("No CSV file specified")]
    NoDestination,

    #[error("No drives selected")]
    NoDrivesSelected,

    #[error("No data found to save")]
    NothingToSave,

    #[error("Invalid CSV format: {0}")]
    InvalidFormat(String),
}

impl Error {
    /// Configuration errors are reported before any filesystem access.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::NoDestination | Error::NoDrivesSelected)
    }
}

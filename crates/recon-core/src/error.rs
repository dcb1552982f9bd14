use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the yard reconciler.
#[derive(Error, Debug)]
pub enum ReconError {
    /// A file could not be opened or read as UTF-8 text.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selected path does not carry a `.csv` extension.
    #[error("The selected file is not a CSV: {0}")]
    NotCsv(PathBuf),

    /// The header row contains the same column more than once after
    /// normalisation.
    #[error("CSV headers are not unique: {}", .0.join(", "))]
    DuplicateHeaders(Vec<String>),

    /// Parsing produced no records at all.
    #[error("File is empty or failed to parse header row: {0}")]
    EmptyDataset(PathBuf),

    /// The YMS dataset lacks one or more columns the metrics need.
    #[error("Missing required headers in YMS data: {}", .0.join(", "))]
    MissingHeaders(Vec<String>),

    /// Reconciliation was requested before both datasets were loaded.
    #[error("Please load both YMS and Dock Dash files first.")]
    NotReady,

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A report could not be serialised.
    #[error("Failed to serialise JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReconError {
    /// `true` for expected UI states that should be reported as information
    /// rather than logged as failures.
    pub fn is_soft(&self) -> bool {
        matches!(self, ReconError::NotReady)
    }
}

/// Convenience alias used throughout the reconciler crates.
pub type Result<T> = std::result::Result<T, ReconError>;

//! Error type for catalog loading and reloading.

use opswall_core::OpsError;

/// Errors that can occur while loading or watching a rotation catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse/deserialization error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Document failed validation (wrong kind, duplicate ids, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Filesystem watcher error.
    #[error("Notify watcher error: {0}")]
    Notify(#[from] notify::Error),

    /// Catalog shape rejected while building the rotation.
    #[error(transparent)]
    Core(#[from] OpsError),
}

impl CatalogError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, CatalogError::Core(e) if e.is_configuration())
    }
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsError {
    /// The rotation catalog is structurally unusable (missing cycle week,
    /// out-of-range cycle index, oversized date range).
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OpsError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, OpsError::Configuration(_))
    }
}

pub type Result<T> = std::result::Result<T, OpsError>;

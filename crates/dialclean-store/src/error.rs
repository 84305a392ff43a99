use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("uploaded stop list has no columns")]
    EmptyUpload,
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Csv,
    MissingHomeDir,
    InvalidDataPath,
    EmptyUpload,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Csv(_) => StoreErrorKind::Csv,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
            StoreError::EmptyUpload => StoreErrorKind::EmptyUpload,
        }
    }
}

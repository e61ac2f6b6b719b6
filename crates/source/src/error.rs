use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("migration file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("migration file '{}' is not valid UTF-8: {message}", path.display())]
    InvalidUtf8 { path: PathBuf, message: String },
    #[error("I/O error while reading '{}': {message}", path.display())]
    Io { path: PathBuf, message: String },
}

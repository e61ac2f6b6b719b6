use crate::mode::ExecutionMode;
use core::fmt;
use core::time::Duration;
use folio_db::{ConnectError, DatabaseFailure, ServerInfo};
use std::path::PathBuf;

/// Where in the transaction an engine error was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Begin,
    Execute,
    Commit,
    Rollback,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Begin => "begin",
            Phase::Execute => "execute",
            Phase::Commit => "commit",
            Phase::Rollback => "rollback",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionFailure {
    pub phase: Phase,
    pub failure: DatabaseFailure,
}

impl ExecutionFailure {
    /// The engine's diagnostic, unmodified.
    pub fn message(&self) -> &str {
        &self.failure.message
    }
}

impl fmt::Display for ExecutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure.code {
            Some(code) => write!(f, "{} failed [{code}]: {}", self.phase, self.failure.message),
            None => write!(f, "{} failed: {}", self.phase, self.failure.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub mode: ExecutionMode,
    pub server: ServerInfo,
    pub source_path: PathBuf,
    pub size_bytes: usize,
    pub checksum: String,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(ApplyReport),
    ConnectionError(ConnectError),
    SourceNotFound(PathBuf),
    ExecutionError(ExecutionFailure),
    UnknownError(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::ConnectionError(_) => "connection_error",
            Outcome::SourceNotFound(_) => "source_not_found",
            Outcome::ExecutionError(_) => "execution_error",
            Outcome::UnknownError(_) => "unknown_error",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(report) => write!(
                f,
                "migration {} succeeded ({})",
                report.source_path.display(),
                report.mode.as_str()
            ),
            Outcome::ConnectionError(err) => write!(f, "{err}"),
            Outcome::SourceNotFound(path) => {
                write!(f, "migration file not found: {}", path.display())
            }
            Outcome::ExecutionError(failure) => write!(f, "{failure}"),
            Outcome::UnknownError(message) => write!(f, "unexpected error: {message}"),
        }
    }
}

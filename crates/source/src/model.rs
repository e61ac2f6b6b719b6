use std::path::{Path, PathBuf};

/// Migration text read once from a single file. Never split or rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationSource {
    path: PathBuf,
    sql: String,
    checksum: String,
}

impl MigrationSource {
    pub fn new(path: impl Into<PathBuf>, sql: String, checksum: String) -> Self {
        Self {
            path: path.into(),
            sql,
            checksum,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn size_bytes(&self) -> usize {
        self.sql.len()
    }
}

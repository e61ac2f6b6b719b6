use crate::checksum::sha256_hex;
use crate::error::SourceError;
use crate::model::MigrationSource;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Reads the whole migration file. The content is returned as-is.
pub fn load_source(path: impl AsRef<Path>) -> Result<MigrationSource, SourceError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SourceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SourceError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    let checksum = sha256_hex(&bytes);
    let sql = String::from_utf8(bytes).map_err(|e| SourceError::InvalidUtf8 {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if sql.trim().is_empty() {
        warn!(path = %path.display(), "migration file is empty");
    }

    debug!(path = %path.display(), bytes = sql.len(), %checksum, "migration source loaded");

    Ok(MigrationSource::new(path, sql, checksum))
}

#[cfg(test)]
mod tests {
    use super::load_source;
    use crate::error::SourceError;
    use std::fs;

    #[test]
    fn missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("migration.sql");

        let err = load_source(&path).unwrap_err();
        assert_eq!(err, SourceError::NotFound { path });
    }

    #[test]
    fn content_is_loaded_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("migration.sql");
        let sql = "-- add column\nALTER TABLE t ADD COLUMN c INT;\n\nCREATE INDEX ON t (c);\n";
        fs::write(&path, sql).unwrap();

        let source = load_source(&path).unwrap();
        assert_eq!(source.sql(), sql);
        assert_eq!(source.size_bytes(), sql.len());
        assert_eq!(source.path(), path.as_path());
        assert_eq!(source.checksum(), crate::sha256_hex(sql.as_bytes()));
    }

    #[test]
    fn non_utf8_content_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("migration.sql");
        fs::write(&path, [0x53, 0x45, 0xff, 0xfe]).unwrap();

        let err = load_source(&path).unwrap_err();
        assert!(matches!(err, SourceError::InvalidUtf8 { .. }));
    }

    #[test]
    fn directory_is_an_io_error() {
        let tmp = tempfile::tempdir().unwrap();

        let err = load_source(tmp.path()).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}

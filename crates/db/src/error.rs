use core::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectFailureKind {
    Authentication,
    UnknownDatabase,
    Unreachable,
    Tls,
    Other,
}

impl ConnectFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectFailureKind::Authentication => "authentication",
            ConnectFailureKind::UnknownDatabase => "unknown_database",
            ConnectFailureKind::Unreachable => "unreachable",
            ConnectFailureKind::Tls => "tls",
            ConnectFailureKind::Other => "other",
        }
    }
}

impl fmt::Display for ConnectFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("connection failed ({kind}): {message}")]
pub struct ConnectError {
    pub kind: ConnectFailureKind,
    pub message: String,
}

impl ConnectError {
    pub fn new(kind: ConnectFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn from_sqlx(err: &sqlx::Error) -> Self {
        let kind = match err {
            sqlx::Error::Database(db) => match db.code().as_deref() {
                // invalid_password, invalid_authorization_specification
                Some("28P01") | Some("28000") => ConnectFailureKind::Authentication,
                // invalid_catalog_name
                Some("3D000") => ConnectFailureKind::UnknownDatabase,
                _ => ConnectFailureKind::Other,
            },
            sqlx::Error::Io(_) => ConnectFailureKind::Unreachable,
            sqlx::Error::Tls(_) => ConnectFailureKind::Tls,
            _ => ConnectFailureKind::Other,
        };

        Self::new(kind, err.to_string())
    }
}

/// A diagnostic reported by the database engine. `message` is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseFailure {
    pub message: String,
    pub code: Option<String>,
    pub detail: Option<String>,
    pub hint: Option<String>,
}

impl DatabaseFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            detail: None,
            hint: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for DatabaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The engine rejected the request.
    #[error("{0}")]
    Database(DatabaseFailure),
    /// Anything the engine did not report itself: I/O, protocol, closed socket.
    #[error("{0}")]
    Transport(String),
}

impl SessionError {
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => {
                let mut failure = DatabaseFailure::new(db.message());
                if let Some(code) = db.code() {
                    failure = failure.with_code(code);
                }
                if let Some(pg) = db.try_downcast_ref::<sqlx::postgres::PgDatabaseError>() {
                    if let Some(detail) = pg.detail() {
                        failure = failure.with_detail(detail);
                    }
                    if let Some(hint) = pg.hint() {
                        failure = failure.with_hint(hint);
                    }
                }
                SessionError::Database(failure)
            }
            other => SessionError::Transport(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid encryption mode '{value}': expected one of require, verify-ca, verify-full")]
pub struct InvalidEncryptionMode {
    pub value: String,
}

/// Never carries the URL itself, which may hold a password.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConnectionUrl {
    #[error("connection URL is malformed: {0}")]
    Malformed(String),
    #[error("unsupported connection URL scheme '{0}': expected postgres or postgresql")]
    Scheme(String),
    #[error(transparent)]
    EncryptionMode(#[from] InvalidEncryptionMode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_classify_as_unreachable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ConnectError::from_sqlx(&sqlx::Error::Io(io));
        assert_eq!(err.kind, ConnectFailureKind::Unreachable);
        assert!(err.message.contains("refused"));
    }

    #[test]
    fn tls_errors_classify_as_tls() {
        let err = ConnectError::from_sqlx(&sqlx::Error::Tls("handshake failed".into()));
        assert_eq!(err.kind, ConnectFailureKind::Tls);
    }

    #[test]
    fn non_database_session_errors_are_transport() {
        let err = SessionError::from_sqlx(sqlx::Error::WorkerCrashed);
        assert!(matches!(err, SessionError::Transport(_)));
    }

    #[test]
    fn database_failure_displays_message_verbatim() {
        let failure = DatabaseFailure::new("column \"c\" of relation \"t\" already exists")
            .with_code("42701");
        assert_eq!(
            failure.to_string(),
            "column \"c\" of relation \"t\" already exists"
        );
    }
}

use crate::contract::{ServerInfo, Session};
use crate::error::SessionError;
use crate::transaction::{self, PgTransaction};
use sqlx::{Connection, PgConnection};
use tracing::{debug, warn};

pub struct PgSession {
    conn: Option<PgConnection>,
    info: ServerInfo,
}

impl PgSession {
    pub(crate) fn new(conn: PgConnection, info: ServerInfo) -> Self {
        Self {
            conn: Some(conn),
            info,
        }
    }
}

impl Session for PgSession {
    type Transaction<'a> = PgTransaction<'a>;

    fn server_info(&self) -> &ServerInfo {
        &self.info
    }

    async fn begin(&mut self) -> Result<PgTransaction<'_>, SessionError> {
        match self.conn.as_mut() {
            Some(conn) => transaction::begin(conn).await,
            None => Err(SessionError::Transport("session is closed".to_string())),
        }
    }

    async fn close(mut self) -> Result<(), SessionError> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };

        conn.close().await.map_err(SessionError::from_sqlx)?;
        debug!(database = %self.info.database, "session closed");
        Ok(())
    }
}

impl Drop for PgSession {
    fn drop(&mut self) {
        // The socket itself is released when `PgConnection` drops.
        if self.conn.is_some() {
            warn!(database = %self.info.database, "session dropped without an explicit close");
        }
    }
}

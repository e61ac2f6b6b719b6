use crate::contract::{Connector, ServerInfo};
use crate::error::ConnectError;
use crate::params::ConnectionParameters;
use crate::session::PgSession;
use sqlx::{Connection, PgConnection};
use tracing::{debug, info, warn};

const SQL_SERVER_INFO: &str = "
SELECT current_database()::text,
       current_user::text,
       current_setting('server_version'),
       COALESCE((SELECT ssl FROM pg_stat_ssl WHERE pid = pg_backend_pid()), FALSE)
";

/// Opens TLS-only PostgreSQL sessions. One attempt per call, no retries.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgConnector;

impl PgConnector {
    pub fn new() -> Self {
        Self
    }
}

impl Connector for PgConnector {
    type Session = PgSession;

    async fn connect(&self, params: &ConnectionParameters) -> Result<PgSession, ConnectError> {
        debug!(
            target_db = %params.target(),
            sslmode = %params.encryption_mode,
            "opening database session"
        );

        let mut conn = PgConnection::connect_with(&params.connect_options())
            .await
            .map_err(|e| ConnectError::from_sqlx(&e))?;

        let info = match server_info(&mut conn).await {
            Ok(info) => info,
            Err(err) => {
                close_quietly(conn).await;
                return Err(err);
            }
        };

        if !info.encrypted {
            // The driver already refused plaintext; this is the server's view of
            // its own link, which differs behind a connection pooler.
            warn!("server reports an unencrypted backend link; client link is TLS");
        }

        info!(
            database = %info.database,
            user = %info.user,
            server_version = %info.server_version,
            "database session established"
        );

        Ok(PgSession::new(conn, info))
    }
}

async fn server_info(conn: &mut PgConnection) -> Result<ServerInfo, ConnectError> {
    let (database, user, server_version, encrypted): (String, String, String, bool) =
        sqlx::query_as(SQL_SERVER_INFO)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| ConnectError::from_sqlx(&e))?;

    Ok(ServerInfo {
        database,
        user,
        server_version,
        encrypted,
    })
}

async fn close_quietly(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        warn!(error = %e, "failed to close rejected connection");
    }
}

use crate::contract::SessionTransaction;
use crate::error::SessionError;
use sqlx::{Connection, PgConnection, Postgres};
use tracing::debug;

/// Dropping a `PgTransaction` without committing rolls it back.
pub struct PgTransaction<'c> {
    tx: sqlx::Transaction<'c, Postgres>,
}

pub async fn begin(conn: &mut PgConnection) -> Result<PgTransaction<'_>, SessionError> {
    conn.begin()
        .await
        .map(|tx| PgTransaction { tx })
        .map_err(SessionError::from_sqlx)
}

impl SessionTransaction for PgTransaction<'_> {
    async fn execute(&mut self, sql: &str) -> Result<(), SessionError> {
        // Simple-query protocol: the server splits multi-statement text itself.
        let conn: &mut PgConnection = &mut self.tx;
        let result = sqlx::Executor::execute(conn, sqlx::raw_sql(sql))
            .await
            .map_err(SessionError::from_sqlx)?;

        debug!(rows_affected = result.rows_affected(), "migration content executed");
        Ok(())
    }

    async fn commit(self) -> Result<(), SessionError> {
        self.tx.commit().await.map_err(SessionError::from_sqlx)
    }

    async fn rollback(self) -> Result<(), SessionError> {
        self.tx.rollback().await.map_err(SessionError::from_sqlx)
    }
}

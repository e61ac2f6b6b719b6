use crate::error::{ConnectError, SessionError};
use crate::params::ConnectionParameters;
use core::future::Future;

/// What the server reported about the session right after the handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    pub database: String,
    pub user: String,
    pub server_version: String,
    pub encrypted: bool,
}

pub trait Connector {
    type Session: Session;

    /// Makes exactly one connection attempt.
    fn connect(
        &self,
        params: &ConnectionParameters,
    ) -> impl Future<Output = Result<Self::Session, ConnectError>> + Send;
}

/// An open, authenticated channel owned by a single caller.
///
/// `close` consumes the session, so a closed session cannot be reused.
/// Implementations must also release the underlying socket on drop.
pub trait Session: Send {
    type Transaction<'a>: SessionTransaction
    where
        Self: 'a;

    fn server_info(&self) -> &ServerInfo;

    fn begin(
        &mut self,
    ) -> impl Future<Output = Result<Self::Transaction<'_>, SessionError>> + Send;

    fn close(self) -> impl Future<Output = Result<(), SessionError>> + Send;
}

/// A transaction that is rolled back unless `commit` succeeds.
pub trait SessionTransaction: Send {
    /// Submits `sql` as one request. The server decides statement boundaries.
    fn execute(&mut self, sql: &str) -> impl Future<Output = Result<(), SessionError>> + Send;

    fn commit(self) -> impl Future<Output = Result<(), SessionError>> + Send;

    fn rollback(self) -> impl Future<Output = Result<(), SessionError>> + Send;
}

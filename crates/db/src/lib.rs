pub mod connector;
pub mod contract;
pub mod error;
pub mod params;
pub mod session;
pub mod transaction;

pub use connector::PgConnector;
pub use contract::{Connector, ServerInfo, Session, SessionTransaction};
pub use error::{
    ConnectError, ConnectFailureKind, DatabaseFailure, InvalidConnectionUrl, InvalidEncryptionMode,
    SessionError,
};
pub use params::{ConnectionParameters, EncryptionMode};
pub use session::PgSession;
pub use transaction::PgTransaction;

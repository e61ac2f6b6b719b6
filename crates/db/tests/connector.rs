use folio_db::{
    ConnectFailureKind, ConnectionParameters, Connector, PgConnector, Session, SessionError,
    SessionTransaction,
};

/// Parameters for a live server; tests using it run with `--ignored`.
fn live_params() -> ConnectionParameters {
    let host = std::env::var("FOLIO_TEST_PGHOST").expect("FOLIO_TEST_PGHOST must be set");
    let port = std::env::var("FOLIO_TEST_PGPORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5432);
    let user = std::env::var("FOLIO_TEST_PGUSER").unwrap_or_else(|_| "postgres".to_string());
    let password = std::env::var("FOLIO_TEST_PGPASSWORD").unwrap_or_default();
    let database =
        std::env::var("FOLIO_TEST_PGDATABASE").unwrap_or_else(|_| "postgres".to_string());

    ConnectionParameters::new(host, user, password, database).with_port(port)
}

#[tokio::test]
async fn refused_port_is_unreachable() {
    let params = ConnectionParameters::new("127.0.0.1", "postgres", "secret", "postgres").with_port(1);

    let err = PgConnector::new().connect(&params).await.err().unwrap();
    assert_eq!(err.kind, ConnectFailureKind::Unreachable);
}

#[tokio::test]
#[ignore = "needs FOLIO_TEST_PGHOST"]
async fn wrong_password_is_authentication_failure() {
    let params = ConnectionParameters {
        password: "definitely-not-the-password".to_string(),
        ..live_params()
    };

    let err = PgConnector::new().connect(&params).await.err().unwrap();
    assert_eq!(err.kind, ConnectFailureKind::Authentication);
}

#[tokio::test]
#[ignore = "needs FOLIO_TEST_PGHOST"]
async fn session_reports_encrypted_transport() {
    let params = live_params();

    let session = PgConnector::new().connect(&params).await.unwrap();
    assert!(session.server_info().encrypted);
    assert_eq!(session.server_info().database, params.database);
    session.close().await.unwrap();
}

#[tokio::test]
#[ignore = "needs FOLIO_TEST_PGHOST"]
async fn rejected_sql_carries_engine_message_and_is_not_committed() {
    let params = live_params();
    let table = format!("folio_db_test_{}", std::process::id());

    let mut session = PgConnector::new().connect(&params).await.unwrap();

    let mut tx = session.begin().await.unwrap();
    let err = tx
        .execute(&format!("CREATE TABLE {table} (id INT); SELEC 1;"))
        .await
        .unwrap_err();
    match err {
        SessionError::Database(failure) => {
            assert!(failure.message.contains("syntax error"));
            assert_eq!(failure.code.as_deref(), Some("42601"));
        }
        other => panic!("unexpected error: {other}"),
    }
    tx.rollback().await.unwrap();

    let mut tx = session.begin().await.unwrap();
    let err = tx
        .execute(&format!("SELECT * FROM {table}"))
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Database(ref f) if f.code.as_deref() == Some("42P01")));
    drop(tx);

    session.close().await.unwrap();
}

use crate::args::Cli;
use crate::error::{CliError, ErrorCategory};
use crate::output;
use crate::progress::ConsoleProgress;
use crate::style::Style;
use crate::ui::Ui;
use folio_db::{ConnectError, ConnectFailureKind, Connector, PgConnector};
use folio_executor::{ApplyReport, ExecutionFailure, ExecutionMode, Outcome, Phase, Runner};
use std::any::Any;
use std::path::Path;
use tracing::debug;

pub async fn run(cli: &Cli) -> Result<ApplyReport, CliError> {
    let params = cli.connection_parameters()?;

    let mode = if cli.dry_run {
        ExecutionMode::DryRun
    } else {
        ExecutionMode::Apply
    };

    debug!(?params, file = %cli.file.display(), mode = mode.as_str(), "configuration resolved");

    let style = Style::detect();
    let progress = ConsoleProgress::new(Ui::new(style), &params, &cli.file);
    let runner = Runner::new(PgConnector::new(), params, cli.file.clone()).with_mode(mode);

    match execute(runner, progress).await {
        Outcome::Success(report) => {
            for line in summary(&report, &Ui::new(style)) {
                output::line(line);
            }
            Ok(report)
        }
        Outcome::ConnectionError(err) => Err(map_connect_error(&err)),
        Outcome::SourceNotFound(path) => Err(map_missing_source(&path)),
        Outcome::ExecutionError(failure) => Err(map_execution_failure(&failure)),
        Outcome::UnknownError(message) => Err(map_unknown(message)),
    }
}

/// Runs the migration in its own task so a panic still yields an `Outcome`.
pub async fn execute<C, P>(runner: Runner<C>, progress: P) -> Outcome
where
    C: Connector + Send + Sync + 'static,
    C::Session: 'static,
    P: folio_executor::Progress + 'static,
{
    let handle = tokio::spawn(async move { runner.run(&progress).await });

    match handle.await {
        Ok(outcome) => outcome,
        Err(err) if err.is_panic() => Outcome::UnknownError(format!(
            "migration task panicked: {}",
            panic_message(err.into_panic())
        )),
        Err(err) => Outcome::UnknownError(err.to_string()),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        return (*s).to_string();
    }
    if let Some(s) = payload.downcast_ref::<String>() {
        return s.clone();
    }
    "<non-string panic payload>".to_string()
}

pub fn summary(report: &ApplyReport, ui: &Ui) -> Vec<String> {
    let title = match report.mode {
        ExecutionMode::Apply => "Migration applied",
        ExecutionMode::DryRun => "Dry run succeeded (rolled back)",
    };

    vec![
        ui.rule(),
        ui.ok_line(title),
        ui.rule(),
        ui.kv("mode", report.mode.as_str()),
        ui.kv("database", &report.server.database),
        ui.kv("user", &report.server.user),
        ui.kv("server version", &report.server.server_version),
        ui.kv("encrypted", if report.server.encrypted { "yes" } else { "no" }),
        ui.kv("source", &report.source_path.display().to_string()),
        ui.kv("size", &format!("{} bytes", report.size_bytes)),
        ui.kv("sha256", &report.checksum),
        ui.kv("elapsed", &format!("{} ms", report.elapsed.as_millis())),
        ui.rule(),
    ]
}

fn map_unknown(message: String) -> CliError {
    CliError::new(ErrorCategory::Unexpected, "Unexpected error")
        .with_reason(message)
        .with_meaning("The failure did not match a connection, file or SQL error.")
        .with_action("Re-run with --log-level debug for details.")
}

fn map_connect_error(err: &ConnectError) -> CliError {
    let (meaning, action) = match err.kind {
        ConnectFailureKind::Authentication => (
            "The server rejected the supplied credentials.",
            "Check PGUSER and PGPASSWORD.",
        ),
        ConnectFailureKind::UnknownDatabase => (
            "The server is reachable but the target database does not exist.",
            "Check PGDATABASE.",
        ),
        ConnectFailureKind::Unreachable => (
            "The server could not be reached.",
            "Check PGHOST and PGPORT, and that the server accepts connections from this machine.",
        ),
        ConnectFailureKind::Tls => (
            "An encrypted session could not be negotiated. folio never falls back to plaintext.",
            "Check that the server has TLS enabled, and check PGSSLMODE and PGSSLROOTCERT.",
        ),
        ConnectFailureKind::Other => (
            "The connection attempt failed before any SQL was executed.",
            "Check the connection settings (PGHOST, PGPORT, PGUSER, PGPASSWORD, PGDATABASE).",
        ),
    };

    CliError::new(ErrorCategory::Connection, "Database connection failed")
        .with_reason(err.message.clone())
        .with_meaning(meaning)
        .with_action(action)
}

fn map_missing_source(path: &Path) -> CliError {
    CliError::new(ErrorCategory::SourceNotFound, "Migration file not found")
        .with_reason(path.display().to_string())
        .with_meaning("Nothing was executed against the database.")
        .with_action("Create the file, or point --file / FOLIO_MIGRATION_FILE at it.")
}

fn map_execution_failure(failure: &ExecutionFailure) -> CliError {
    let mut reason = failure.message().to_string();
    if let Some(detail) = &failure.failure.detail {
        reason.push_str(&format!("\nDETAIL: {detail}"));
    }
    if let Some(hint) = &failure.failure.hint {
        reason.push_str(&format!("\nHINT: {hint}"));
    }

    let sqlstate = failure
        .failure
        .code
        .as_deref()
        .map(|code| format!(" (SQLSTATE {code})"))
        .unwrap_or_default();

    let meaning = match failure.phase {
        Phase::Begin | Phase::Execute => format!(
            "The database rejected the migration{sqlstate}. The transaction was not committed."
        ),
        Phase::Commit => format!(
            "The commit failed{sqlstate}. No change from this migration is durable."
        ),
        Phase::Rollback => format!("The dry-run rollback failed{sqlstate}."),
    };

    CliError::new(ErrorCategory::Execution, "Migration failed")
        .with_reason(reason)
        .with_meaning(meaning)
        .with_action("Fix the migration SQL or the database state, then run folio again.")
}

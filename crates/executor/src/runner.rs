use crate::mode::ExecutionMode;
use crate::outcome::{ApplyReport, ExecutionFailure, Outcome, Phase};
use crate::state::{Progress, RunState};
use folio_db::{ConnectionParameters, Connector, Session, SessionError, SessionTransaction};
use folio_source::{load_source, MigrationSource, SourceError};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Connects, loads the migration file, executes it as one unit and commits.
pub struct Runner<C> {
    connector: C,
    params: ConnectionParameters,
    source_path: PathBuf,
    mode: ExecutionMode,
}

impl<C: Connector> Runner<C> {
    pub fn new(connector: C, params: ConnectionParameters, source_path: impl Into<PathBuf>) -> Self {
        Self {
            connector,
            params,
            source_path: source_path.into(),
            mode: ExecutionMode::Apply,
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub async fn run(&self, progress: &dyn Progress) -> Outcome {
        let started = Instant::now();

        enter(progress, RunState::Connecting);
        let mut session = match self.connector.connect(&self.params).await {
            Ok(session) => session,
            Err(err) => {
                debug!(kind = %err.kind, error = %err.message, "connection failed");
                enter(progress, RunState::Closed);
                return Outcome::ConnectionError(err);
            }
        };
        enter(progress, RunState::Connected);

        let result = apply(&mut session, &self.source_path, self.mode, progress).await;
        let server = session.server_info().clone();

        // Single release point for every path past a successful connect.
        if let Err(err) = session.close().await {
            warn!(error = %err, "failed to close database session");
        }
        enter(progress, RunState::Closed);

        match result {
            Ok(source) => {
                let report = ApplyReport {
                    mode: self.mode,
                    server,
                    source_path: source.path().to_path_buf(),
                    size_bytes: source.size_bytes(),
                    checksum: source.checksum().to_string(),
                    elapsed: started.elapsed(),
                };
                info!(
                    mode = self.mode.as_str(),
                    checksum = %report.checksum,
                    elapsed_ms = report.elapsed.as_millis() as u64,
                    "migration finished"
                );
                Outcome::Success(report)
            }
            Err(outcome) => {
                debug!(outcome = outcome.kind(), "migration failed");
                outcome
            }
        }
    }
}

async fn apply<S: Session>(
    session: &mut S,
    source_path: &Path,
    mode: ExecutionMode,
    progress: &dyn Progress,
) -> Result<MigrationSource, Outcome> {
    enter(progress, RunState::Loading);
    let source = load_source(source_path).map_err(classify_source_error)?;

    enter(progress, RunState::Executing);
    let mut tx = session
        .begin()
        .await
        .map_err(|e| classify_session_error(Phase::Begin, e))?;

    // On failure `tx` drops uncommitted and the server discards the work.
    tx.execute(source.sql())
        .await
        .map_err(|e| classify_session_error(Phase::Execute, e))?;

    match mode {
        ExecutionMode::Apply => {
            enter(progress, RunState::Committing);
            tx.commit()
                .await
                .map_err(|e| classify_session_error(Phase::Commit, e))?;
        }
        ExecutionMode::DryRun => {
            enter(progress, RunState::RollingBack);
            tx.rollback()
                .await
                .map_err(|e| classify_session_error(Phase::Rollback, e))?;
        }
    }

    Ok(source)
}

fn enter(progress: &dyn Progress, state: RunState) {
    debug!(state = state.as_str(), "state transition");
    progress.on_state(state);
}

fn classify_source_error(err: SourceError) -> Outcome {
    match err {
        SourceError::NotFound { path } => Outcome::SourceNotFound(path),
        other => Outcome::UnknownError(other.to_string()),
    }
}

fn classify_session_error(phase: Phase, err: SessionError) -> Outcome {
    match err {
        SessionError::Database(failure) => {
            Outcome::ExecutionError(ExecutionFailure { phase, failure })
        }
        SessionError::Transport(message) => {
            Outcome::UnknownError(format!("{phase} failed: {message}"))
        }
    }
}

use crate::output;
use crate::ui::Ui;
use folio_db::ConnectionParameters;
use folio_executor::{Progress, RunState};
use std::path::{Path, PathBuf};

pub struct ConsoleProgress {
    ui: Ui,
    target: String,
    sslmode: &'static str,
    source: PathBuf,
}

impl ConsoleProgress {
    pub fn new(ui: Ui, params: &ConnectionParameters, source: &Path) -> Self {
        Self {
            ui,
            target: params.target(),
            sslmode: params.encryption_mode.as_str(),
            source: source.to_path_buf(),
        }
    }

    pub fn message(&self, state: RunState) -> Option<String> {
        let line = match state {
            RunState::Connecting => self.ui.info_line(&format!(
                "Connecting to {} (sslmode={})",
                self.target, self.sslmode
            )),
            RunState::Connected => self.ui.ok_line("Connected"),
            RunState::Loading => self
                .ui
                .info_line(&format!("Reading {}", self.source.display())),
            RunState::Executing => self.ui.info_line("Executing migration"),
            RunState::Committing => self.ui.info_line("Committing"),
            RunState::RollingBack => self.ui.info_line("Rolling back (dry run)"),
            RunState::Closed => return None,
        };
        Some(line)
    }
}

impl Progress for ConsoleProgress {
    fn on_state(&self, state: RunState) {
        if let Some(line) = self.message(state) {
            output::line(line);
        }
    }
}

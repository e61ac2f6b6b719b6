#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Connecting,
    Connected,
    Loading,
    Executing,
    Committing,
    RollingBack,
    /// Terminal. The session, if one was opened, has been released.
    Closed,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Connecting => "connecting",
            RunState::Connected => "connected",
            RunState::Loading => "loading",
            RunState::Executing => "executing",
            RunState::Committing => "committing",
            RunState::RollingBack => "rolling_back",
            RunState::Closed => "closed",
        }
    }
}

/// Observer for state transitions, used for console progress.
pub trait Progress: Send + Sync {
    fn on_state(&self, state: RunState);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn on_state(&self, _state: RunState) {}
}

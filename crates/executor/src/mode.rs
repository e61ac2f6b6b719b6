#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    Apply,
    /// Execute inside the transaction, then roll it back.
    DryRun,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Apply => "apply",
            ExecutionMode::DryRun => "dry_run",
        }
    }
}

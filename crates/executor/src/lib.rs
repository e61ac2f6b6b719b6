pub mod mode;
pub mod outcome;
pub mod runner;
pub mod state;

pub use mode::ExecutionMode;
pub use outcome::{ApplyReport, ExecutionFailure, Outcome, Phase};
pub use runner::Runner;
pub use state::{NoProgress, Progress, RunState};

pub mod apply;
pub mod args;
pub mod config;
pub mod error;
pub mod error_view;
pub mod logging;
pub mod output;
pub mod progress;
pub mod style;
pub mod ui;

pub use args::Cli;
pub use error::{CliError, ErrorCategory, EXIT_FAILURE};

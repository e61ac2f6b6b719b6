use core::fmt;

/// Every failure exits with the same status; the error view carries the detail.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Connection,
    SourceNotFound,
    Execution,
    Unexpected,
}

impl ErrorCategory {
    pub fn heading(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "Configuration Error",
            ErrorCategory::Connection => "Connection Error",
            ErrorCategory::SourceNotFound => "Missing Migration File",
            ErrorCategory::Execution => "Migration Error",
            ErrorCategory::Unexpected => "Unexpected Error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CliError {
    category: ErrorCategory,
    title: String,
    reason: Option<String>,
    meaning: Option<String>,
    action: Option<String>,
}

impl CliError {
    pub fn new(category: ErrorCategory, title: impl Into<String>) -> Self {
        Self {
            category,
            title: title.into(),
            reason: None,
            meaning: None,
            action: None,
        }
    }

    pub fn user_error(title: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Configuration, title)
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = Some(meaning.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn meaning(&self) -> Option<&str> {
        self.meaning.as_deref()
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl std::error::Error for CliError {}

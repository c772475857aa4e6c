//! Application Errors
//!
//! Domain operations never fail; these cover the ambient plumbing around them.

/// Common result type for fallible plumbing
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Embedded configuration could not be parsed
    Config(String),
    /// Browser history could not be updated
    Navigation(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Navigation(msg) => write!(f, "Navigation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

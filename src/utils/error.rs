use std::fmt;

/// Failure classes surfaced by the command dispatch loop
#[derive(Debug)]
pub enum AppError {
    NotConfigured,
    AuthFailed(String),
    AuthorizationRead(String),
    DataRead(String),
    DataWrite(String),
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotConfigured => {
                write!(f, "Database integration is not configured")
            }
            AppError::AuthFailed(msg) => write!(f, "Sign-in failed: {}", msg),
            AppError::AuthorizationRead(msg) => write!(f, "Authorization check failed: {}", msg),
            AppError::DataRead(msg) => write!(f, "Error loading data: {}", msg),
            AppError::DataWrite(msg) => write!(f, "Write failed: {}", msg),
            AppError::InvalidInput(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

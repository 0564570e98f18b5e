//! Shared error pieces for the VietCal binaries.

use thiserror::Error;

/// Fatal startup failure: configuration or client construction went wrong
/// before any work started.
#[derive(Error, Debug)]
#[error("initialization error: {message}")]
pub struct InitializationError {
    /// What failed during startup.
    pub message: String,
    /// Underlying cause, when one exists.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl InitializationError {
    /// Create an initialization error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

/// Exit codes for the CLI binaries.
pub mod exit_codes {
    /// Full-batch success.
    pub const SUCCESS: i32 = 0;
    /// Initialization failure or any record failure.
    pub const FAILURE: i32 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialization_error_display() {
        let err = InitializationError::new("store config invalid");
        assert_eq!(err.to_string(), "initialization error: store config invalid");
    }

    #[test]
    fn test_initialization_error_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = InitializationError::new("client build failed").with_source(io);
        assert!(std::error::Error::source(&err).is_some());
    }
}

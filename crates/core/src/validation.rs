//! Input validation
//!
//! Validation failures are ordinary values so a batch caller can collect
//! them per record instead of aborting on the first bad input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Accumulated validation outcome for one value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create an empty (passing) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether validation passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All collected errors.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Add an error.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Take the first error, if any.
    pub fn into_first_error(mut self) -> Option<ValidationError> {
        if self.errors.is_empty() {
            None
        } else {
            Some(self.errors.remove(0))
        }
    }
}

/// Builder-style validator for chaining field checks.
#[derive(Debug, Default)]
pub struct Validator {
    result: ValidationResult,
}

impl Validator {
    /// Start a new validation chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-empty string field.
    #[must_use]
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.result
                .add_error(ValidationError::new(field, "must not be empty"));
        }
        self
    }

    /// Require a finite, non-negative number.
    #[must_use]
    pub fn non_negative(mut self, field: &str, value: f64) -> Self {
        if !value.is_finite() {
            self.result
                .add_error(ValidationError::new(field, "must be a finite number"));
        } else if value < 0.0 {
            self.result
                .add_error(ValidationError::new(field, "must not be negative"));
        }
        self
    }

    /// Finish the chain and return the accumulated result.
    pub fn finish(self) -> ValidationResult {
        self.result
    }
}

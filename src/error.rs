//! Error types for the contact registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ContactField;
use std::path::PathBuf;
use thiserror::Error;

/// A contact was rejected because a required field was absent.
///
/// Only the first missing field (in validation order) is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{field} cannot be null")]
pub struct InvalidContactError {
    field: ContactField,
}

impl InvalidContactError {
    pub fn new(field: ContactField) -> Self {
        Self { field }
    }

    /// The field that failed validation.
    pub fn field(&self) -> ContactField {
        self.field
    }
}

/// Errors that can occur while loading phone-number fixtures.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Fixture file could not be read
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fixture file contained no values
    #[error("Fixture {0} contains no phone numbers")]
    Empty(PathBuf),
}

/// Errors that can occur while seeding a registry from fixtures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// A fixture row was rejected by the registry
    #[error(transparent)]
    InvalidContact(#[from] InvalidContactError),

    /// The registry was still empty after inserting a fixture row
    #[error("Registry is empty after inserting {0}")]
    EmptyAfterInsert(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with InvalidContactError
pub type ContactResult<T> = Result<T, InvalidContactError>;

/// Convenience type alias for Results with FixtureError
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Convenience type alias for Results with RunError
pub type RunResult<T> = Result<T, RunError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

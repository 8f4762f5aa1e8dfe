//! Contact Registry - an in-memory, insertion-ordered store of validated contacts.
//!
//! # Architecture
//!
//! - **registry**: The contact registry and its thread-safe wrapper
//! - **models**: The immutable `Contact` record
//! - **domain**: Contact field vocabulary used in validation errors
//! - **error**: Custom error types for precise error handling
//! - **fixtures**: Phone-number fixtures (built-in list and file loader)
//! - **config**: Configuration management from environment variables
//! - **runner**: Seeds a registry from fixtures for the command-line runner

pub mod config;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod registry;
pub mod runner;

pub use config::Config;
pub use domain::ContactField;
pub use error::{ConfigError, FixtureError, InvalidContactError, RunError};
pub use models::Contact;
pub use registry::{ContactRegistry, SharedContactRegistry};
pub use runner::RunReport;

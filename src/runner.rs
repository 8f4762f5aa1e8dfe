//! Fixture runner: feeds phone-number fixtures into a registry.

use crate::config::Config;
use crate::error::{FixtureResult, RunError, RunResult};
use crate::fixtures;
use crate::models::Contact;
use crate::registry::ContactRegistry;
use serde::Serialize;
use tracing::debug;

/// Outcome of a fixture run, printed as JSON by the binary.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunReport {
    /// Number of successful insertions
    pub inserted: usize,

    /// Registry contents after the run, in insertion order
    pub contacts: Vec<Contact>,
}

/// Phone numbers for a run: the configured fixture file, or the built-in list.
pub fn phone_numbers_for(config: &Config) -> FixtureResult<Vec<String>> {
    match &config.fixture_path {
        Some(path) => fixtures::load_phone_numbers(path),
        None => Ok(fixtures::default_phone_numbers()),
    }
}

/// Insert every phone number `config.repeat_count` times with the configured names.
///
/// Stops at the first rejected contact, or if the registry is still empty
/// after an insertion.
pub fn seed_registry(
    registry: &mut ContactRegistry,
    config: &Config,
    phone_numbers: &[String],
) -> RunResult<usize> {
    let mut inserted = 0;

    for phone_number in phone_numbers {
        for repetition in 0..config.repeat_count {
            registry.add_contact(
                Some(config.first_name.as_str()),
                Some(config.last_name.as_str()),
                Some(phone_number.as_str()),
            )?;
            ensure_non_empty(registry, phone_number)?;
            inserted += 1;
            debug!(phone_number = %phone_number, repetition, "Fixture row inserted");
        }
    }

    Ok(inserted)
}

/// Fail unless `registry` holds at least one contact after inserting `phone_number`.
pub fn ensure_non_empty(registry: &ContactRegistry, phone_number: &str) -> RunResult<()> {
    if registry.is_empty() {
        return Err(RunError::EmptyAfterInsert(phone_number.to_string()));
    }
    Ok(())
}

/// Build a fresh registry from `config` and seed it with `phone_numbers`.
pub fn run(config: &Config, phone_numbers: &[String]) -> RunResult<RunReport> {
    let mut registry = ContactRegistry::new();
    let inserted = seed_registry(&mut registry, config, phone_numbers)?;

    Ok(RunReport {
        inserted,
        contacts: registry.get_all_contacts().to_vec(),
    })
}

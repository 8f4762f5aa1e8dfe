//! Shared setup for integration tests.
//!
//! Each test builds its own registry through [`setup`]; suite-wide data is
//! built once and shared read-only.

use contact_registry::ContactRegistry;
use once_cell::sync::Lazy;
use std::path::PathBuf;

#[allow(dead_code)]
pub const FIRST_NAME: &str = "John";
#[allow(dead_code)]
pub const LAST_NAME: &str = "Doe";
#[allow(dead_code)]
pub const PHONE_NUMBER: &str = "0123456789";

/// Phone numbers shared by the whole suite, built on first use.
#[allow(dead_code)]
pub static SUITE_PHONE_NUMBERS: Lazy<Vec<String>> =
    Lazy::new(|| contact_registry::fixtures::load_phone_numbers(fixture_path()).unwrap());

/// Fresh, empty registry for a single test.
#[allow(dead_code)]
pub fn setup() -> ContactRegistry {
    ContactRegistry::new()
}

/// Registry already holding `John Doe, 0123456789`.
#[allow(dead_code)]
pub fn setup_with_john_doe() -> ContactRegistry {
    let mut registry = setup();
    registry
        .add_contact(Some(FIRST_NAME), Some(LAST_NAME), Some(PHONE_NUMBER))
        .unwrap();
    registry
}

/// Path of the checked-in phone number fixture.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/phone_numbers.csv")
}

//! Tests for loading phone-number fixtures from disk and feeding them to a registry.

mod fixtures;

use fixtures::{fixture_path, setup, FIRST_NAME, LAST_NAME};
use contact_registry::error::FixtureError;
use contact_registry::fixtures::{load_phone_numbers, DEFAULT_PHONE_NUMBERS};
use contact_registry::{runner, Config};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_checked_in_fixture_matches_defaults() {
    let numbers = load_phone_numbers(fixture_path()).unwrap();
    assert_eq!(numbers, DEFAULT_PHONE_NUMBERS);
}

#[test]
fn test_every_fixture_row_is_inserted() {
    let mut registry = setup();

    for phone_number in load_phone_numbers(fixture_path()).unwrap() {
        registry
            .add_contact(Some(FIRST_NAME), Some(LAST_NAME), Some(phone_number.as_str()))
            .unwrap();
        assert!(!registry.is_empty());
    }

    assert_eq!(registry.len(), 3);
}

#[test]
fn test_load_delimited_file() {
    let file = write_fixture("# number,label\n0123456789,mobile\n\n0123456123,work\n");

    let numbers = load_phone_numbers(file.path()).unwrap();
    assert_eq!(numbers, vec!["0123456789", "0123456123"]);
}

#[test]
fn test_quoted_values_are_stored_unquoted() {
    let file = write_fixture("\"0123456789\",home\n\"0123456123\",\"work, main\"\n");
    let mut registry = setup();

    for phone_number in load_phone_numbers(file.path()).unwrap() {
        registry
            .add_contact(Some(FIRST_NAME), Some(LAST_NAME), Some(phone_number.as_str()))
            .unwrap();
    }

    let numbers: Vec<&str> = registry
        .get_all_contacts()
        .iter()
        .map(|c| c.phone_number())
        .collect();
    assert_eq!(numbers, vec!["0123456789", "0123456123"]);
}

#[test]
fn test_load_empty_file_fails() {
    let file = write_fixture("\n# nothing here\n");

    match load_phone_numbers(file.path()) {
        Err(FixtureError::Empty(path)) => assert_eq!(path, file.path()),
        other => panic!("Expected Empty error, got: {:?}", other),
    }
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_phone_numbers(dir.path().join("missing.csv"));
    assert!(matches!(result, Err(FixtureError::Io { .. })));
}

#[test]
fn test_runner_uses_configured_fixture() {
    let file = write_fixture("0999999999\n0888888888\n");
    let config = Config {
        fixture_path: Some(file.path().to_path_buf()),
        first_name: "Jane".to_string(),
        last_name: "Roe".to_string(),
        repeat_count: 3,
        ..Config::default()
    };

    let numbers = runner::phone_numbers_for(&config).unwrap();
    let report = runner::run(&config, &numbers).unwrap();

    assert_eq!(report.inserted, 6);
    assert_eq!(report.contacts.len(), 6);
    assert!(report.contacts[..3]
        .iter()
        .all(|c| c.matches("Jane", "Roe", "0999999999")));
    assert!(report.contacts[3..]
        .iter()
        .all(|c| c.matches("Jane", "Roe", "0888888888")));
}

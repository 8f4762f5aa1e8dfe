//! Contact model representing a person held by the registry.

use serde::Serialize;

/// A contact stored in a [`ContactRegistry`](crate::registry::ContactRegistry).
///
/// Contacts are only built by the registry after validation, and their fields
/// cannot change afterwards. There is no identifier: two contacts with the
/// same names and number are simply equal values.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    first_name: String,
    last_name: String,
    phone_number: String,
}

impl Contact {
    pub(crate) fn new(first_name: String, last_name: String, phone_number: String) -> Self {
        Self {
            first_name,
            last_name,
            phone_number,
        }
    }

    /// First name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Phone number, exactly as supplied
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Whether this contact holds exactly the given values.
    pub fn matches(&self, first_name: &str, last_name: &str, phone_number: &str) -> bool {
        self.first_name == first_name
            && self.last_name == last_name
            && self.phone_number == phone_number
    }
}

//! ContactField enumeration.

use std::fmt;

/// One of the three required attributes of a contact.
///
/// Variants are declared in validation order: a contact is checked
/// first name, then last name, then phone number.
///
/// # Example
///
/// ```
/// use contact_registry::domain::ContactField;
///
/// assert_eq!(ContactField::PhoneNumber.to_string(), "Phone Number");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl ContactField {
    /// Human-readable label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::PhoneNumber => "Phone Number",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

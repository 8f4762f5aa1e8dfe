use crate::domain::ContactField;
use crate::error::{ContactResult, InvalidContactError};
use crate::models::Contact;
use tracing::{debug, warn};

/// In-memory, insertion-ordered collection of contacts.
///
/// Every stored contact had all three fields present when it was added.
/// Duplicates are allowed and nothing is ever removed, so the collection
/// only grows for the lifetime of the registry.
///
/// The registry is not synchronized; wrap it in a
/// [`SharedContactRegistry`](super::SharedContactRegistry) to use it from
/// several threads.
///
/// # Example
///
/// ```
/// use contact_registry::ContactRegistry;
///
/// let mut registry = ContactRegistry::new();
/// registry
///     .add_contact(Some("John"), Some("Doe"), Some("0123456789"))
///     .unwrap();
///
/// assert_eq!(registry.get_all_contacts().len(), 1);
/// assert!(registry.add_contact(None, Some("Doe"), Some("0123456789")).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRegistry {
    contacts: Vec<Contact>,
}

impl ContactRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a contact.
    ///
    /// Fields are checked in the order first name, last name, phone number,
    /// and only presence is checked: empty strings are accepted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidContactError` naming the first absent field. The
    /// registry is left untouched in that case.
    pub fn add_contact(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> ContactResult<()> {
        let contact = Self::validate(first_name, last_name, phone_number).inspect_err(|e| {
            warn!(field = %e.field(), "Rejected contact");
        })?;

        self.contacts.push(contact);
        debug!(contacts = self.contacts.len(), "Contact added");
        Ok(())
    }

    /// All contacts in insertion order.
    pub fn get_all_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of contacts held.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn validate(
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> ContactResult<Contact> {
        let first_name = Self::require(first_name, ContactField::FirstName)?;
        let last_name = Self::require(last_name, ContactField::LastName)?;
        let phone_number = Self::require(phone_number, ContactField::PhoneNumber)?;

        Ok(Contact::new(
            first_name.to_string(),
            last_name.to_string(),
            phone_number.to_string(),
        ))
    }

    fn require(value: Option<&str>, field: ContactField) -> ContactResult<&str> {
        value.ok_or_else(|| InvalidContactError::new(field))
    }
}

use super::ContactRegistry;
use crate::error::ContactResult;
use crate::models::Contact;
use std::sync::{Arc, Mutex, MutexGuard};

/// Thread-safe handle to a [`ContactRegistry`].
///
/// Clones share the same underlying registry. Every operation takes the lock
/// for its whole duration, so concurrent adds are serialized and a reader
/// never observes a half-applied insertion.
#[derive(Debug, Clone, Default)]
pub struct SharedContactRegistry {
    inner: Arc<Mutex<ContactRegistry>>,
}

impl SharedContactRegistry {
    /// Create a handle to a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a contact. See [`ContactRegistry::add_contact`].
    pub fn add_contact(
        &self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> ContactResult<()> {
        self.lock().add_contact(first_name, last_name, phone_number)
    }

    /// Copy of all contacts in insertion order.
    pub fn get_all_contacts(&self) -> Vec<Contact> {
        self.lock().get_all_contacts().to_vec()
    }

    /// Number of contacts held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the whole registry as it is right now.
    pub fn snapshot(&self) -> ContactRegistry {
        self.lock().clone()
    }

    // Validation happens before the push, so a panic while the lock is held
    // cannot leave a partially inserted contact behind.
    fn lock(&self) -> MutexGuard<'_, ContactRegistry> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<ContactRegistry> for SharedContactRegistry {
    fn from(registry: ContactRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }
}

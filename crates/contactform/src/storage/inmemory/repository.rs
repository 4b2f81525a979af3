//! In-memory repository implementation.

use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use contactform_core::contact::{Contact, NewContact};
use contactform_core::storage::{ContactRepository, Result};

/// In-memory storage backend for testing.
///
/// Data is not persisted and will be lost when the repository is dropped.
/// Ids are assigned from a monotonic counter starting at 1 and are never
/// reused, matching the SQLite backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    contacts: Arc<RwLock<Vec<Contact>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryRepository {
    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.clone())
    }

    async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn create_contact(&self, new: &NewContact) -> Result<Contact> {
        let mut contacts = self.contacts.write().await;

        // Id assignment happens under the write lock so list order matches
        // id order.
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let contact = new.clone().into_contact(id);

        contacts.push(contact.clone());
        Ok(contact)
    }

    async fn delete_contact(&self, id: i64) -> Result<()> {
        let mut contacts = self.contacts.write().await;
        contacts.retain(|c| c.id != id);
        Ok(())
    }
}

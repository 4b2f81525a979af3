use async_trait::async_trait;

use crate::contact::{Contact, NewContact};

use super::Result;

/// Repository for contact operations.
///
/// Implementations own record lifetime end to end: ids are assigned by the
/// store on insert and `list_contacts` returns records in storage order.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Gets all contacts in storage order.
    async fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Gets a contact by its ID.
    async fn get_contact(&self, id: i64) -> Result<Option<Contact>>;

    /// Persists a new submission and returns the stored record with its
    /// store-assigned id.
    async fn create_contact(&self, new: &NewContact) -> Result<Contact>;

    /// Deletes a contact by its ID.
    ///
    /// Deleting an id that does not exist is not an error.
    async fn delete_contact(&self, id: i64) -> Result<()>;
}

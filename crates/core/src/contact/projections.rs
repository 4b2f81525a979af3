//! Field projections over the full contact list.
//!
//! These back the `/contact/emails` and `/contact/phones` endpoints: iterate
//! every stored contact in storage order and extract one field per record.
//! Duplicates are preserved, one element per contact.

use super::types::Contact;

/// Extracts the email of every contact, preserving storage order.
pub fn project_emails(contacts: &[Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.email.clone()).collect()
}

/// Extracts the phone of every contact, preserving storage order.
pub fn project_phones(contacts: &[Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.phone.clone()).collect()
}

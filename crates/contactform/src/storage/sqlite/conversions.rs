//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without the async wrapper.

use contactform_core::contact::Contact;
use rusqlite::Row;

/// Convert a SQLite row to a Contact.
///
/// Expected columns: id, name, email, phone, message
pub fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        message: row.get(4)?,
    })
}

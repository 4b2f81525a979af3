//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! pure data with no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Contacts table
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    message TEXT NOT NULL
);
"#;

// Contact queries
pub const INSERT_CONTACT: &str = r#"
INSERT INTO contacts (name, email, phone, message)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_ALL_CONTACTS: &str = r#"
SELECT id, name, email, phone, message
FROM contacts
ORDER BY id ASC
"#;

pub const SELECT_CONTACT_BY_ID: &str = r#"
SELECT id, name, email, phone, message
FROM contacts
WHERE id = ?1
"#;

pub const DELETE_CONTACT: &str = r#"
DELETE FROM contacts
WHERE id = ?1
"#;

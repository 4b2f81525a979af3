//! SQLite repository implementation.
//!
//! Implements the repository trait from `contactform_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use contactform_core::contact::{Contact, NewContact};
use contactform_core::storage::{ContactRepository, RepositoryError, Result};

use super::conversions::row_to_contact;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to the contacts table. The store assigns ids via
/// `INTEGER PRIMARY KEY AUTOINCREMENT`, so ids are never reused.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ContactRepository for SqliteRepository {
    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_CONTACTS)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_contact).map_err(wrap_err)?;

                let mut contacts = Vec::new();
                for row_result in rows {
                    contacts.push(row_result.map_err(wrap_err)?);
                }
                Ok(contacts)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Contact"))
    }

    async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CONTACT_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_contact) {
                    Ok(contact) => Ok(Some(contact)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Contact"))
    }

    async fn create_contact(&self, new: &NewContact) -> Result<Contact> {
        let new = new.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_CONTACT,
                    rusqlite::params![new.name, new.email, new.phone, new.message],
                )
                .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                Ok(new.into_contact(id))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Contact"))
    }

    async fn delete_contact(&self, id: i64) -> Result<()> {
        // Zero affected rows is fine: deleting a missing id is a no-op.
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_CONTACT, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Contact"))
    }
}

use serde::{Deserialize, Serialize};

/// A stored contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Store-assigned identifier, immutable once assigned.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A submission as received from the transport layer, before the store has
/// assigned an id.
///
/// All four fields are required; the store rejects null values but performs
/// no format validation on email or phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl NewContact {
    /// Creates a new submission payload.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    /// Builds the stored record once the store has assigned an id.
    pub fn into_contact(self, id: i64) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
        }
    }
}

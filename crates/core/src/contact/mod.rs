mod projections;
mod types;

pub use projections::{project_emails, project_phones};
pub use types::{Contact, NewContact};

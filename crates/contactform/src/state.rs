//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses a repository trait object for storage
//! abstraction and supports different backends via feature flags.

use std::sync::Arc;

use contactform_core::storage::ContactRepository;

use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository trait
/// object for database access. No other state is held across requests.
#[derive(Clone)]
pub struct AppState {
    /// Contact repository backing every endpoint.
    pub contact_repo: Arc<dyn ContactRepository>,
}

impl AppState {
    /// Creates a new AppState with the given repository.
    fn build(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            Ok(Self::build(repo))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for development without any external dependencies.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            Ok(Self::build(Arc::new(InMemoryRepository::new())))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

//! In-memory storage backend for testing and development.
//!
//! This module provides an in-memory implementation of the repository trait
//! that keeps contacts in a `Vec` behind `tokio::sync::RwLock`, preserving
//! insertion order so listings and projections match the SQLite backend.

mod repository;

pub use repository::InMemoryRepository;

//! Core domain types and storage contracts for the contactform project.
//!
//! This crate holds the pure parts of the system: the `Contact` record, the
//! field projections used by the emails/phones endpoints, the repository
//! trait, and the storage error taxonomy with its HTTP status mapping.
//! Nothing in here performs I/O.

pub mod contact;
pub mod storage;

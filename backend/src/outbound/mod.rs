//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: document-store repository using the `mongodb` driver
//! - **memory**: process-local repository for tests and database-less runs
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;

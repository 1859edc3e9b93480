//! Document-store persistence adapters using the `mongodb` driver.
//!
//! - **Thin adapters**: [`MongoBookRepository`] only translates between
//!   stored documents and domain types. No business logic resides here.
//! - **Internal documents**: the stored layout (`documents.rs`) never leaves
//!   this module.
//! - **Bounded calls**: every round trip runs under the configured operation
//!   deadline and driver errors are mapped to port errors.
//!
//! # Example
//!
//! ```ignore
//! use bookstore::outbound::persistence::{
//!     MongoBookRepository, StoreConfig, StoreConnection, ensure_collection,
//! };
//!
//! let connection = StoreConnection::connect(StoreConfig::new("mongodb://localhost")).await?;
//! let collection = ensure_collection(&connection).await?;
//! let repo = MongoBookRepository::new(collection, connection.config().operation_timeout());
//! ```

mod connection;
mod documents;
mod error_mapping;
mod mongo_book_repository;
mod provision;

pub use connection::{StoreConfig, StoreConnection, StoreError};
pub use mongo_book_repository::MongoBookRepository;
pub use provision::{
    BookCollection, CollectionState, IDENTITY_INDEX_NAME, ensure_collection, ensure_identity_index,
};

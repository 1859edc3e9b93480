//! Port abstraction for book persistence adapters and their errors.
//!
//! Every method is a single round trip to the document store. Adapters hold
//! no cached state between calls and bound each call with a deadline.

use async_trait::async_trait;

use crate::domain::{Book, BookDetails, BookId, BookIdentity};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by book repository adapters.
    pub enum BookRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "book store connection failed: {message}",
        /// The store did not answer within the operation deadline.
        Timeout { operation: String } => "book store operation timed out: {operation}",
        /// A store-level uniqueness constraint rejected the write.
        Duplicate { message: String } => "book store rejected a duplicate record: {message}",
        /// Query, mutation or decoding failed.
        Query { message: String } => "book store query failed: {message}",
    }
}

/// Document-store operations backing the catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Every stored book, in whatever order the store returns them.
    async fn list_all(&self) -> Result<Vec<Book>, BookRepositoryError>;

    /// Books whose fields all equal `details`, ISBN included when present.
    async fn find_exact(&self, details: &BookDetails) -> Result<Vec<Book>, BookRepositoryError>;

    /// Number of books sharing `identity`.
    async fn count_by_identity(&self, identity: &BookIdentity) -> Result<u64, BookRepositoryError>;

    /// Insert a new record and return it with its store-assigned id.
    async fn insert(&self, details: &BookDetails) -> Result<Book, BookRepositoryError>;

    /// Atomically overwrite every field of the book with `id`.
    ///
    /// Returns the post-image, or `None` when no record has that id.
    async fn replace(
        &self,
        id: &BookId,
        details: &BookDetails,
    ) -> Result<Option<Book>, BookRepositoryError>;

    /// Delete the book with `id`, returning how many records were removed.
    async fn delete(&self, id: &BookId) -> Result<u64, BookRepositoryError>;
}

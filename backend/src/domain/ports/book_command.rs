//! Driving port for catalogue mutations.

use async_trait::async_trait;

use crate::domain::{Book, BookDetails, BookId, Error};

/// Request to add a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookRequest {
    pub book: BookDetails,
}

/// Created book including its assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookResponse {
    pub book: Book,
}

/// Request to overwrite a book.
///
/// `id` is the raw hex text received at the boundary; the service validates
/// it. `book` is the complete desired state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBookRequest {
    pub id: String,
    pub book: BookDetails,
}

/// Post-image of an updated book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBookResponse {
    pub book: Book,
}

/// Request to delete a book by its raw hex id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteBookRequest {
    pub id: String,
}

/// Identifier of the removed book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteBookResponse {
    pub id: BookId,
}

/// Create, update and delete use-cases.
///
/// Failures map onto [`crate::domain::ErrorCode`]: `InvalidRequest` for
/// validation, `InvalidId` for malformed ids, `Conflict` for duplicates,
/// `NotFound` for unknown ids and `ServiceUnavailable` when the store cannot
/// be reached in time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookCommand: Send + Sync {
    async fn create_book(&self, request: CreateBookRequest) -> Result<CreateBookResponse, Error>;

    async fn update_book(&self, request: UpdateBookRequest) -> Result<UpdateBookResponse, Error>;

    async fn delete_book(&self, request: DeleteBookRequest) -> Result<DeleteBookResponse, Error>;
}

//! Catalogue domain services.
//!
//! These services implement the book driving ports on top of a
//! [`BookRepository`]. They hold no state besides the repository handle; each
//! call is a fresh round trip to the store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::domain::book::projection::{api_views, page_views};
use crate::domain::ports::{
    BookCommand, BookQuery, BookRepository, BookRepositoryError, CreateBookRequest,
    CreateBookResponse, DeleteBookRequest, DeleteBookResponse, UpdateBookRequest,
    UpdateBookResponse,
};
use crate::domain::{BookApiView, BookId, BookPageView, Error};

pub(crate) const INVALID_BOOK_MESSAGE: &str = "Name, author, pages and year cannot be empty!";
pub(crate) const DUPLICATE_BOOK_MESSAGE: &str = "There already exists the exact book!";
pub(crate) const BOOK_NOT_FOUND_MESSAGE: &str = "Book not found";
pub(crate) const INVALID_ID_MESSAGE: &str = "Invalid ID format";

fn map_repository_error(err: BookRepositoryError) -> Error {
    match err {
        BookRepositoryError::Connection { message } => {
            warn!(%message, "book store unavailable");
            Error::service_unavailable(format!("book store unavailable: {message}"))
        }
        BookRepositoryError::Timeout { operation } => {
            warn!(%operation, "book store timed out");
            Error::service_unavailable(format!("book store timed out during {operation}"))
        }
        BookRepositoryError::Duplicate { .. } => Error::conflict(DUPLICATE_BOOK_MESSAGE),
        BookRepositoryError::Query { message } => {
            error!(%message, "book store rejected the operation");
            Error::internal(format!("book store error: {message}"))
        }
    }
}

fn parse_book_id(raw: &str) -> Result<BookId, Error> {
    BookId::parse(raw.trim()).map_err(|err| {
        debug!(error = %err, "rejected malformed book id");
        Error::invalid_id(INVALID_ID_MESSAGE)
    })
}

/// Book service implementing the query driving port.
#[derive(Clone)]
pub struct BookQueryService<R> {
    book_repo: Arc<R>,
}

impl<R> BookQueryService<R> {
    /// Create a new query service over the book repository.
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }
}

#[async_trait]
impl<R> BookQuery for BookQueryService<R>
where
    R: BookRepository,
{
    async fn list_books(&self) -> Result<Vec<BookApiView>, Error> {
        let books = self
            .book_repo
            .list_all()
            .await
            .map_err(map_repository_error)?;
        Ok(api_views(&books))
    }

    async fn list_book_pages(&self) -> Result<Vec<BookPageView>, Error> {
        let books = self
            .book_repo
            .list_all()
            .await
            .map_err(map_repository_error)?;
        Ok(page_views(&books))
    }
}

/// Book service implementing the command driving port.
#[derive(Clone)]
pub struct BookCommandService<R> {
    book_repo: Arc<R>,
}

impl<R> BookCommandService<R> {
    /// Create a new command service over the book repository.
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }
}

#[async_trait]
impl<R> BookCommand for BookCommandService<R>
where
    R: BookRepository,
{
    async fn create_book(&self, request: CreateBookRequest) -> Result<CreateBookResponse, Error> {
        let CreateBookRequest { book } = request;
        book.validate().map_err(|err| {
            Error::invalid_request(INVALID_BOOK_MESSAGE)
                .with_details(serde_json::json!({ "reason": err.to_string() }))
        })?;

        // Check-then-insert is not isolated; concurrent creates may both pass.
        // The unique identity index, when present, rejects the loser.
        let existing = self
            .book_repo
            .count_by_identity(&book.identity())
            .await
            .map_err(map_repository_error)?;
        if existing > 0 {
            return Err(Error::conflict(DUPLICATE_BOOK_MESSAGE));
        }

        let created = self
            .book_repo
            .insert(&book)
            .await
            .map_err(map_repository_error)?;
        info!(book_id = %created.id(), name = %created.name(), "book created");

        Ok(CreateBookResponse { book: created })
    }

    async fn update_book(&self, request: UpdateBookRequest) -> Result<UpdateBookResponse, Error> {
        let UpdateBookRequest { id, book } = request;
        let id = parse_book_id(&id)?;

        let updated = self
            .book_repo
            .replace(&id, &book)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(BOOK_NOT_FOUND_MESSAGE))?;
        info!(book_id = %id, "book updated");

        Ok(UpdateBookResponse { book: updated })
    }

    async fn delete_book(&self, request: DeleteBookRequest) -> Result<DeleteBookResponse, Error> {
        let id = parse_book_id(&request.id)?;

        let deleted = self
            .book_repo
            .delete(&id)
            .await
            .map_err(map_repository_error)?;
        if deleted == 0 {
            return Err(Error::not_found(BOOK_NOT_FOUND_MESSAGE));
        }
        info!(book_id = %id, "book deleted");

        Ok(DeleteBookResponse { id })
    }
}

#[cfg(test)]
#[path = "book_service_tests.rs"]
mod tests;

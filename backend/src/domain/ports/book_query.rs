//! Driving port for reading the catalogue.

use async_trait::async_trait;

use crate::domain::{BookApiView, BookPageView, Error};

/// Read-only catalogue listing in each presentation shape.
///
/// Neither call filters, limits or sorts. An empty store yields an empty
/// list, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookQuery: Send + Sync {
    /// All books in the JSON API projection.
    async fn list_books(&self) -> Result<Vec<BookApiView>, Error>;

    /// All books in the view projection used by rendered pages.
    async fn list_book_pages(&self) -> Result<Vec<BookPageView>, Error>;
}

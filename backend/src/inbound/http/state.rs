//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BookCommand, BookQuery};
use crate::inbound::http::render::PageRenderer;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub books: Arc<dyn BookQuery>,
    pub book_commands: Arc<dyn BookCommand>,
    pub pages: Arc<dyn PageRenderer>,
}

impl HttpState {
    /// Construct state from the port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bookstore::domain::{BookCommandService, BookQueryService};
    /// use bookstore::inbound::http::render::HtmlPageRenderer;
    /// use bookstore::inbound::http::state::HttpState;
    /// use bookstore::outbound::memory::InMemoryBookRepository;
    ///
    /// let store = Arc::new(InMemoryBookRepository::new());
    /// let _state = HttpState::new(
    ///     Arc::new(BookQueryService::new(store.clone())),
    ///     Arc::new(BookCommandService::new(store)),
    ///     Arc::new(HtmlPageRenderer),
    /// );
    /// ```
    pub fn new(
        books: Arc<dyn BookQuery>,
        book_commands: Arc<dyn BookCommand>,
        pages: Arc<dyn PageRenderer>,
    ) -> Self {
        Self {
            books,
            book_commands,
            pages,
        }
    }
}

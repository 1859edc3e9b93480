//! Builders for HTTP state over the selected catalogue store.

use std::sync::Arc;

use bookstore::bootstrap::CatalogueStore;
use bookstore::domain::ports::BookRepository;
use bookstore::domain::{BookCommandService, BookQueryService};
use bookstore::inbound::http::render::HtmlPageRenderer;
use bookstore::inbound::http::state::HttpState;

/// Wire query and command services over the same repository.
fn services_over<R>(repository: Arc<R>) -> HttpState
where
    R: BookRepository + 'static,
{
    HttpState::new(
        Arc::new(BookQueryService::new(repository.clone())),
        Arc::new(BookCommandService::new(repository)),
        Arc::new(HtmlPageRenderer),
    )
}

/// Build handler state for whichever store startup selected.
pub fn build_http_state(store: &CatalogueStore) -> HttpState {
    match store {
        CatalogueStore::Document { repository, .. } => services_over(repository.clone()),
        CatalogueStore::InMemory(repository) => services_over(repository.clone()),
    }
}

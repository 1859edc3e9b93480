//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the catalogue and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves
//! it in debug builds; `cargo run --bin openapi-dump` prints it.

use utoipa::OpenApi;

use crate::inbound::http::books::{BookBody, MutationResponseBody, UpdateBookBody};
use crate::inbound::http::schemas::{BookApiViewSchema, ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        description = "Book catalogue backed by a document store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::create_book,
        crate::inbound::http::books::update_book,
        crate::inbound::http::books::delete_book,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BookApiViewSchema,
        BookBody,
        UpdateBookBody,
        MutationResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "books", description = "Catalogue operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn document_lists_every_book_route() {
        let openapi = ApiDoc::openapi();

        let books = openapi
            .paths
            .paths
            .get("/api/books")
            .expect("collection path registered");
        assert!(books.get.is_some());
        assert!(books.post.is_some());
        assert!(books.put.is_some());

        let single = openapi
            .paths
            .paths
            .get("/api/books/{id}")
            .expect("item path registered");
        assert!(single.delete.is_some());
    }

    #[rstest]
    fn document_registers_error_schema() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components present");
        assert!(components.schemas.contains_key("crate.domain.Error"));
    }
}

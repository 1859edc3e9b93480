//! Book catalogue JSON API.
//!
//! ```text
//! GET    /api/books
//! POST   /api/books
//! PUT    /api/books
//! DELETE /api/books/{id}
//! ```
//!
//! Missing body fields decode to their empty values and are rejected by
//! validation; bodies that are not JSON objects of the right shape answer
//! `400 Invalid book data` through [`super::error::json_error_handler`].

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::BookDetails;
use crate::domain::ports::{CreateBookRequest, DeleteBookRequest, UpdateBookRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{BookApiViewSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

pub const CREATED_MESSAGE: &str = "Book created successfully";
pub const UPDATED_MESSAGE: &str = "Book modified successfully";
pub const DELETED_MESSAGE: &str = "Book deleted successfully";

/// Request payload for creating a book.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct BookBody {
    #[schema(example = "Frankenstein")]
    pub name: String,
    #[schema(example = "Mary Shelley")]
    pub author: String,
    #[schema(example = "978-3-649-64609-9")]
    pub isbn: Option<String>,
    #[schema(example = 280)]
    pub pages: i32,
    #[schema(example = 1818)]
    pub year: i32,
}

impl From<BookBody> for BookDetails {
    fn from(body: BookBody) -> Self {
        BookDetails::new(body.name, body.author, body.isbn, body.pages, body.year)
    }
}

/// Request payload for overwriting a book.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct UpdateBookBody {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Frankenstein")]
    pub name: String,
    #[schema(example = "Mary Shelley")]
    pub author: String,
    pub isbn: Option<String>,
    #[schema(example = 280)]
    pub pages: i32,
    #[schema(example = 1818)]
    pub year: i32,
}

/// Acknowledgement returned by every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct MutationResponseBody {
    #[schema(example = "Book created successfully")]
    pub message: String,
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
}

impl MutationResponseBody {
    fn new(message: &str, id: String) -> Self {
        Self {
            message: message.to_owned(),
            id,
        }
    }
}

/// List every book in the catalogue.
#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "All books", body = [BookApiViewSchema]),
        (status = 503, description = "Book store unavailable", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/books")]
pub async fn list_books(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let books = state.books.list_books().await?;
    Ok(HttpResponse::Ok().json(books))
}

/// Add a book unless an identical one already exists.
#[utoipa::path(
    post,
    path = "/api/books",
    request_body = BookBody,
    responses(
        (status = 201, description = "Book created", body = MutationResponseBody),
        (status = 400, description = "Missing fields or invalid body", body = ErrorSchema),
        (status = 409, description = "Identical book exists", body = ErrorSchema),
        (status = 503, description = "Book store unavailable", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "createBook"
)]
#[post("/books")]
pub async fn create_book(
    state: web::Data<HttpState>,
    payload: web::Json<BookBody>,
) -> ApiResult<HttpResponse> {
    let response = state
        .book_commands
        .create_book(CreateBookRequest {
            book: payload.into_inner().into(),
        })
        .await?;
    Ok(HttpResponse::Created().json(MutationResponseBody::new(
        CREATED_MESSAGE,
        response.book.id().to_hex(),
    )))
}

/// Overwrite every field of a book.
#[utoipa::path(
    put,
    path = "/api/books",
    request_body = UpdateBookBody,
    responses(
        (status = 200, description = "Book updated", body = MutationResponseBody),
        (status = 400, description = "Malformed id or body", body = ErrorSchema),
        (status = 404, description = "Book not found", body = ErrorSchema),
        (status = 409, description = "Update collides with another book", body = ErrorSchema),
        (status = 503, description = "Book store unavailable", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "updateBook"
)]
#[put("/books")]
pub async fn update_book(
    state: web::Data<HttpState>,
    payload: web::Json<UpdateBookBody>,
) -> ApiResult<web::Json<MutationResponseBody>> {
    let UpdateBookBody {
        id,
        name,
        author,
        isbn,
        pages,
        year,
    } = payload.into_inner();
    let response = state
        .book_commands
        .update_book(UpdateBookRequest {
            id,
            book: BookDetails::new(name, author, isbn, pages, year),
        })
        .await?;
    Ok(web::Json(MutationResponseBody::new(
        UPDATED_MESSAGE,
        response.book.id().to_hex(),
    )))
}

/// Remove a book by id.
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    params(("id" = String, Path, description = "24 character hex book id")),
    responses(
        (status = 200, description = "Book deleted", body = MutationResponseBody),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Book not found", body = ErrorSchema),
        (status = 503, description = "Book store unavailable", body = ErrorSchema)
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
#[delete("/books/{id}")]
pub async fn delete_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MutationResponseBody>> {
    let response = state
        .book_commands
        .delete_book(DeleteBookRequest {
            id: path.into_inner(),
        })
        .await?;
    Ok(web::Json(MutationResponseBody::new(
        DELETED_MESSAGE,
        response.id.to_hex(),
    )))
}

#[cfg(test)]
#[path = "books_tests.rs"]
mod tests;

//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and live in the inbound adapter
//! where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The supplied book id is not 24 hexadecimal characters.
    #[schema(rename = "invalid_id")]
    InvalidId,
    /// No book has the supplied id.
    #[schema(rename = "not_found")]
    NotFound,
    /// An identical book already exists.
    #[schema(rename = "conflict")]
    Conflict,
    /// The book store could not be reached in time.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "conflict")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "There already exists the exact book!")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::BookApiView`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BookApiView)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookApiViewSchema {
    /// 24 character hex identifier.
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    id: String,
    #[schema(example = "Frankenstein")]
    name: String,
    #[schema(example = "Mary Shelley")]
    author: String,
    /// Empty when the book has no ISBN.
    #[schema(example = "978-3-649-64609-9")]
    isbn: String,
    #[schema(example = 280)]
    pages: i32,
    #[schema(example = 1818)]
    year: i32,
}

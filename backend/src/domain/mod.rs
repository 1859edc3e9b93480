//! Domain primitives, services and ports for the book catalogue.
//!
//! Purpose: define the book record, its read projections, and the use-cases
//! that validate and mediate every access to the document store. Nothing in
//! here knows about HTTP or the concrete store driver.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Book, BookId, BookDetails: the record model.
//! - BookApiView, BookPageView: the two read projections.
//! - BookQueryService, BookCommandService: driving port implementations.
//! - BookSeeder: idempotent bootstrap seeding.

pub mod book;
pub mod book_seeding;
pub mod book_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::book::{
    Book, BookApiView, BookDetails, BookId, BookIdError, BookIdentity, BookPageView,
    BookValidationError,
};
pub use self::book_seeding::{
    BookSeeder, BookSeedingError, SeedCatalogue, SeedOutcome, SeedReport, default_seed_books,
};
pub use self::book_service::{BookCommandService, BookQueryService};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

//! Book record: the catalogue's only persisted entity.
//!
//! A [`Book`] pairs a store-assigned [`BookId`] with its [`BookDetails`].
//! Read-side projections for the JSON API and the rendered views live in
//! [`projection`].

mod id;
pub mod projection;

pub use id::{BookId, BookIdError};
pub use projection::{BookApiView, BookPageView};

/// Validation failures raised before a book may be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BookValidationError {
    #[error("book name must not be empty")]
    EmptyName,
    #[error("book author must not be empty")]
    EmptyAuthor,
    #[error("page count must be set")]
    MissingPages,
    #[error("publication year must be set")]
    MissingYear,
}

/// Replaceable content of a book record.
///
/// `pages` and `year` use zero as the "unset" sentinel. An empty ISBN is
/// normalised to `None` so it is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub name: String,
    pub author: String,
    pub isbn: Option<String>,
    pub pages: i32,
    pub year: i32,
}

impl BookDetails {
    /// Build details, dropping a blank ISBN.
    ///
    /// # Examples
    /// ```
    /// use bookstore::domain::BookDetails;
    ///
    /// let details = BookDetails::new("Frankenstein", "Mary Shelley", Some(String::new()), 280, 1818);
    /// assert!(details.isbn.is_none());
    /// ```
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        isbn: Option<String>,
        pages: i32,
        year: i32,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            isbn: isbn.filter(|value| !value.trim().is_empty()),
            pages,
            year,
        }
    }

    /// Check the fields required for creation.
    ///
    /// Checks run in a fixed order (name, author, pages, year) and the first
    /// failure is reported.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.name.trim().is_empty() {
            return Err(BookValidationError::EmptyName);
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        if self.pages == 0 {
            return Err(BookValidationError::MissingPages);
        }
        if self.year == 0 {
            return Err(BookValidationError::MissingYear);
        }
        Ok(())
    }

    /// Fields that identify a logical book for duplicate detection.
    pub fn identity(&self) -> BookIdentity {
        BookIdentity {
            name: self.name.clone(),
            author: self.author.clone(),
            pages: self.pages,
            year: self.year,
        }
    }
}

/// Duplicate-detection key: two records with equal identities describe the
/// same book. ISBN is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookIdentity {
    pub name: String,
    pub author: String,
    pub pages: i32,
    pub year: i32,
}

/// A persisted book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    details: BookDetails,
}

impl Book {
    pub fn new(id: BookId, details: BookDetails) -> Self {
        Self { id, details }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn details(&self) -> &BookDetails {
        &self.details
    }

    pub fn name(&self) -> &str {
        self.details.name.as_str()
    }

    pub fn author(&self) -> &str {
        self.details.author.as_str()
    }

    pub fn isbn(&self) -> Option<&str> {
        self.details.isbn.as_deref()
    }

    pub fn pages(&self) -> i32 {
        self.details.pages
    }

    pub fn year(&self) -> i32 {
        self.details.year
    }
}

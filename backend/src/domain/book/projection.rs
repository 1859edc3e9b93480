//! Read-side shapes of a [`Book`].
//!
//! Both projections are pure functions of the record. The API projection
//! uses the lowercase keys of the JSON contract; the page projection uses the
//! capitalised keys the view templates bind to. In both the id is hex and an
//! absent ISBN renders as an empty string.

use serde::{Deserialize, Serialize};

use super::Book;

/// JSON API shape of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookApiView {
    pub id: String,
    pub name: String,
    pub author: String,
    pub isbn: String,
    pub pages: i32,
    pub year: i32,
}

/// View-template shape of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPageView {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "BookName")]
    pub name: String,
    #[serde(rename = "BookAuthor")]
    pub author: String,
    #[serde(rename = "BookISBN")]
    pub isbn: String,
    #[serde(rename = "BookPages")]
    pub pages: i32,
    #[serde(rename = "BookYears")]
    pub year: i32,
}

impl From<&Book> for BookApiView {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().to_hex(),
            name: book.name().to_owned(),
            author: book.author().to_owned(),
            isbn: book.isbn().unwrap_or_default().to_owned(),
            pages: book.pages(),
            year: book.year(),
        }
    }
}

impl From<&Book> for BookPageView {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().to_hex(),
            name: book.name().to_owned(),
            author: book.author().to_owned(),
            isbn: book.isbn().unwrap_or_default().to_owned(),
            pages: book.pages(),
            year: book.year(),
        }
    }
}

/// Project books into the API shape, keeping store order.
pub fn api_views(books: &[Book]) -> Vec<BookApiView> {
    books.iter().map(BookApiView::from).collect()
}

/// Project books into the view shape, keeping store order.
pub fn page_views(books: &[Book]) -> Vec<BookPageView> {
    books.iter().map(BookPageView::from).collect()
}

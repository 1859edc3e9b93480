//! Stored document layout and query builders.
//!
//! One document per book: `_id` holds the object id, `isbn` is omitted when
//! absent. These types never leave the persistence module.

use bson::oid::ObjectId;
use bson::{Document, doc};
use serde::{Deserialize, Serialize};

use crate::domain::ports::BookRepositoryError;
use crate::domain::{Book, BookDetails, BookId, BookIdentity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    pub pages: i32,
    pub year: i32,
}

impl BookDocument {
    /// Document for insertion; the store assigns `_id`.
    pub fn from_details(details: &BookDetails) -> Self {
        Self {
            id: None,
            name: details.name.clone(),
            author: details.author.clone(),
            isbn: details.isbn.clone(),
            pages: details.pages,
            year: details.year,
        }
    }

    /// Convert a fetched document into a domain record.
    pub fn into_book(self) -> Result<Book, BookRepositoryError> {
        let id = self
            .id
            .ok_or_else(|| BookRepositoryError::query("stored book has no _id"))?;
        Ok(Book::new(
            BookId::from_object_id(id),
            BookDetails::new(self.name, self.author, self.isbn, self.pages, self.year),
        ))
    }
}

pub(crate) fn id_filter(id: &BookId) -> Document {
    doc! { "_id": *id.as_object_id() }
}

pub(crate) fn identity_filter(identity: &BookIdentity) -> Document {
    doc! {
        "name": identity.name.as_str(),
        "author": identity.author.as_str(),
        "pages": identity.pages,
        "year": identity.year,
    }
}

/// Match on every field; an absent ISBN only matches documents without one.
pub(crate) fn exact_filter(details: &BookDetails) -> Document {
    let mut filter = identity_filter(&details.identity());
    match &details.isbn {
        Some(isbn) => filter.insert("isbn", isbn.as_str()),
        None => filter.insert("isbn", doc! { "$exists": false }),
    };
    filter
}

/// Overwrite every field; an absent ISBN removes the stored one.
pub(crate) fn replacement_update(details: &BookDetails) -> Document {
    let mut set = doc! {
        "name": details.name.as_str(),
        "author": details.author.as_str(),
        "pages": details.pages,
        "year": details.year,
    };
    match &details.isbn {
        Some(isbn) => {
            set.insert("isbn", isbn.as_str());
            doc! { "$set": set }
        }
        None => doc! { "$set": set, "$unset": { "isbn": "" } },
    }
}

/// Key specification of the unique identity index.
pub(crate) fn identity_index_keys() -> Document {
    doc! { "name": 1, "author": 1, "pages": 1, "year": 1 }
}

//! Store-assigned book identifier.

use std::str::FromStr;

use bson::oid::ObjectId;

/// Raised when identifier text is not 24 hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("book identifier must be 24 hexadecimal characters, got {value:?}")]
pub struct BookIdError {
    value: String,
}

/// Opaque, globally unique book identifier.
///
/// Wraps the document store's 12-byte object id. At every boundary it is
/// exchanged as lowercase hex.
///
/// # Examples
/// ```
/// use bookstore::domain::BookId;
///
/// let id = BookId::parse("65a1f0c2e4b0a1b2c3d4e5f6").expect("well-formed id");
/// assert_eq!(id.to_hex(), "65a1f0c2e4b0a1b2c3d4e5f6");
/// assert!(BookId::parse("not-an-id").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(ObjectId);

impl BookId {
    /// Allocate a new identifier. Only stores that mint their own ids use this.
    #[must_use]
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Parse the canonical hex form.
    pub fn parse(value: &str) -> Result<Self, BookIdError> {
        ObjectId::parse_str(value)
            .map(Self)
            .map_err(|_| BookIdError {
                value: value.to_owned(),
            })
    }

    #[must_use]
    pub fn from_object_id(id: ObjectId) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_object_id(&self) -> &ObjectId {
        &self.0
    }

    /// Canonical 24-character hex rendering.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl FromStr for BookId {
    type Err = BookIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

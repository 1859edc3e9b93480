//! Process-local book store.
//!
//! Mirrors the document store's per-operation semantics: listing returns
//! insertion order, `replace` runs under one write lock so no reader sees a
//! half-applied update, and identity uniqueness is enforced on writes when
//! enabled (as the unique index does for the real store). Used by tests and
//! as the fallback when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{BookRepository, BookRepositoryError};
use crate::domain::{Book, BookDetails, BookId, BookIdentity};

/// In-memory implementation of the book repository port.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
    unique_identity: bool,
}

impl InMemoryBookRepository {
    /// Empty store without a uniqueness constraint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store that rejects writes colliding on [`BookIdentity`].
    pub fn with_unique_identity() -> Self {
        Self {
            books: RwLock::default(),
            unique_identity: true,
        }
    }

    fn check_unique(
        &self,
        books: &[Book],
        details: &BookDetails,
        skip: Option<BookId>,
    ) -> Result<(), BookRepositoryError> {
        if !self.unique_identity {
            return Ok(());
        }
        let identity = details.identity();
        let collides = books
            .iter()
            .filter(|book| Some(book.id()) != skip)
            .any(|book| book.details().identity() == identity);
        if collides {
            return Err(BookRepositoryError::duplicate(format!(
                "identity ({}, {}, {}, {}) already stored",
                identity.name, identity.author, identity.pages, identity.year
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list_all(&self) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(self.books.read().await.clone())
    }

    async fn find_exact(&self, details: &BookDetails) -> Result<Vec<Book>, BookRepositoryError> {
        let books = self.books.read().await;
        Ok(books
            .iter()
            .filter(|book| book.details() == details)
            .cloned()
            .collect())
    }

    async fn count_by_identity(&self, identity: &BookIdentity) -> Result<u64, BookRepositoryError> {
        let books = self.books.read().await;
        let count = books
            .iter()
            .filter(|book| &book.details().identity() == identity)
            .count();
        u64::try_from(count).map_err(|err| BookRepositoryError::query(err.to_string()))
    }

    async fn insert(&self, details: &BookDetails) -> Result<Book, BookRepositoryError> {
        let mut books = self.books.write().await;
        self.check_unique(&books, details, None)?;
        let book = Book::new(BookId::generate(), details.clone());
        books.push(book.clone());
        Ok(book)
    }

    async fn replace(
        &self,
        id: &BookId,
        details: &BookDetails,
    ) -> Result<Option<Book>, BookRepositoryError> {
        let mut books = self.books.write().await;
        let Some(position) = books.iter().position(|book| book.id() == *id) else {
            return Ok(None);
        };
        self.check_unique(&books, details, Some(*id))?;
        let book = Book::new(*id, details.clone());
        books[position] = book.clone();
        Ok(Some(book))
    }

    async fn delete(&self, id: &BookId) -> Result<u64, BookRepositoryError> {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|book| book.id() != *id);
        Ok(if books.len() < before { 1 } else { 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn details(name: &str) -> BookDetails {
        BookDetails::new(name, "A", None, 1, 2000)
    }

    #[rstest]
    #[tokio::test]
    async fn unique_identity_rejects_colliding_insert() {
        let store = InMemoryBookRepository::with_unique_identity();
        store.insert(&details("X")).await.expect("first insert succeeds");

        let error = store
            .insert(&details("X"))
            .await
            .expect_err("second insert collides");

        assert!(matches!(error, BookRepositoryError::Duplicate { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn replace_may_keep_its_own_identity() {
        let store = InMemoryBookRepository::with_unique_identity();
        let book = store.insert(&details("X")).await.expect("insert succeeds");

        let mut replacement = details("X");
        replacement.isbn = Some("123".to_owned());
        let updated = store
            .replace(&book.id(), &replacement)
            .await
            .expect("replace succeeds");

        assert_eq!(updated.map(|book| book.details().clone()), Some(replacement));
    }

    #[rstest]
    #[tokio::test]
    async fn replace_unknown_id_returns_none() {
        let store = InMemoryBookRepository::new();
        let result = store
            .replace(&BookId::generate(), &details("X"))
            .await
            .expect("replace runs");
        assert!(result.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn replace_unknown_id_ignores_identity_collisions() {
        let store = InMemoryBookRepository::with_unique_identity();
        store.insert(&details("X")).await.expect("insert succeeds");

        let result = store
            .replace(&BookId::generate(), &details("X"))
            .await
            .expect("replace runs");

        assert!(result.is_none());
        assert_eq!(store.list_all().await.expect("list succeeds").len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn replace_onto_another_identity_is_duplicate() {
        let store = InMemoryBookRepository::with_unique_identity();
        store.insert(&details("X")).await.expect("insert succeeds");
        let other = store.insert(&details("Y")).await.expect("insert succeeds");

        let error = store
            .replace(&other.id(), &details("X"))
            .await
            .expect_err("identity taken");

        assert!(matches!(error, BookRepositoryError::Duplicate { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_counts_removed_records() {
        let store = InMemoryBookRepository::new();
        let book = store.insert(&details("X")).await.expect("insert succeeds");

        assert_eq!(store.delete(&book.id()).await.expect("delete runs"), 1);
        assert_eq!(store.delete(&book.id()).await.expect("delete runs"), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn concurrent_readers_never_see_partial_updates() {
        let store = std::sync::Arc::new(InMemoryBookRepository::new());
        let original = BookDetails::new("Old", "Old", None, 1, 1);
        let replacement = BookDetails::new("New", "New", None, 2, 2);
        let book = store.insert(&original).await.expect("insert succeeds");

        let writer = {
            let store = store.clone();
            let replacement = replacement.clone();
            tokio::spawn(async move { store.replace(&book.id(), &replacement).await })
        };
        for _ in 0..50 {
            let seen = store.list_all().await.expect("list succeeds");
            let current = seen[0].details();
            assert!(current == &original || current == &replacement);
        }
        writer
            .await
            .expect("writer task joins")
            .expect("replace succeeds");
    }
}

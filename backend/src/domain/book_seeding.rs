//! Bootstrap seeding of the catalogue.
//!
//! Each seed book is checked independently against the store by exact match
//! on all of its fields: absent books are inserted, present books are left
//! alone, and more than one match aborts seeding because the store already
//! holds duplicates it should never have accepted. A seed whose identity is
//! already taken by an edited record (for example a changed ISBN) is skipped
//! when the store enforces unique identities. Re-running is safe; a crash
//! mid-way leaves earlier seeds in place and later runs skip them.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::ports::{BookRepository, BookRepositoryError};
use crate::domain::{BookDetails, BookId, BookValidationError};

/// Per-seed result of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The seed was missing and has been inserted.
    Inserted(BookId),
    /// Exactly one matching record already existed.
    AlreadyPresent(BookId),
    /// No exact match, but the store refused the insert because another
    /// record holds the same (name, author, pages, year).
    Conflicting,
}

/// Report of one seeding run, in seed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub outcomes: Vec<SeedOutcome>,
}

impl SeedReport {
    pub fn inserted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, SeedOutcome::Inserted(_)))
            .count()
    }

    pub fn already_present(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, SeedOutcome::AlreadyPresent(_)))
            .count()
    }

    pub fn conflicting(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, SeedOutcome::Conflicting))
            .count()
    }
}

/// Errors raised while seeding. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum BookSeedingError {
    /// A seed entry would not pass creation validation.
    #[error("seed entry {index} is invalid: {source}")]
    InvalidSeed {
        index: usize,
        #[source]
        source: BookValidationError,
    },
    /// The store holds several copies of a seed book.
    #[error("found {matches} records matching seed {name:?} by {author:?}; store is corrupted")]
    IntegrityViolation {
        name: String,
        author: String,
        matches: usize,
    },
    /// The store failed while seeding.
    #[error("book seeding persistence error: {0}")]
    Persistence(#[from] BookRepositoryError),
}

/// On-disk seed catalogue format.
///
/// ```json
/// {"books": [{"name": "Frankenstein", "author": "Mary Shelley", "pages": 280, "year": 1818}]}
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedCatalogue {
    books: Vec<SeedBook>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedBook {
    name: String,
    author: String,
    #[serde(default)]
    isbn: Option<String>,
    pages: i32,
    year: i32,
}

impl SeedCatalogue {
    /// Parse a catalogue from JSON text.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Seed books in file order.
    pub fn into_books(self) -> Vec<BookDetails> {
        self.books
            .into_iter()
            .map(|seed| BookDetails::new(seed.name, seed.author, seed.isbn, seed.pages, seed.year))
            .collect()
    }
}

/// Built-in bootstrap dataset.
pub fn default_seed_books() -> Vec<BookDetails> {
    vec![
        BookDetails::new(
            "The Vortex",
            "José Eustasio Rivera",
            Some("958-30-0804-4".to_owned()),
            292,
            1924,
        ),
        BookDetails::new(
            "Frankenstein",
            "Mary Shelley",
            Some("978-3-649-64609-9".to_owned()),
            280,
            1818,
        ),
        BookDetails::new(
            "The Black Cat",
            "Edgar Allan Poe",
            Some("978-3-99168-238-7".to_owned()),
            280,
            1843,
        ),
    ]
}

/// Service that makes sure every seed book is stored exactly once.
#[derive(Clone)]
pub struct BookSeeder<R> {
    repository: Arc<R>,
}

impl<R> BookSeeder<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> BookSeeder<R>
where
    R: BookRepository,
{
    /// Insert whichever seeds are missing.
    ///
    /// # Errors
    ///
    /// Returns [`BookSeedingError`] when a seed is invalid, the store holds
    /// more than one copy of a seed, or the store fails. Seeds processed
    /// before the failure stay inserted.
    pub async fn ensure_seeded(&self, seeds: &[BookDetails]) -> Result<SeedReport, BookSeedingError> {
        for (index, seed) in seeds.iter().enumerate() {
            seed.validate()
                .map_err(|source| BookSeedingError::InvalidSeed { index, source })?;
        }

        let mut report = SeedReport::default();
        for seed in seeds {
            let matches = self.repository.find_exact(seed).await?;
            let outcome = match matches.as_slice() {
                [] => match self.repository.insert(seed).await {
                    Ok(book) => {
                        info!(book_id = %book.id(), name = %seed.name, "seed book inserted");
                        SeedOutcome::Inserted(book.id())
                    }
                    Err(BookRepositoryError::Duplicate { message }) => {
                        warn!(name = %seed.name, %message, "seed book conflicts with an edited record; skipped");
                        SeedOutcome::Conflicting
                    }
                    Err(err) => return Err(err.into()),
                },
                [existing] => {
                    info!(book_id = %existing.id(), name = %seed.name, "seed book already present");
                    SeedOutcome::AlreadyPresent(existing.id())
                }
                many => {
                    error!(name = %seed.name, matches = many.len(), "seed book stored more than once");
                    return Err(BookSeedingError::IntegrityViolation {
                        name: seed.name.clone(),
                        author: seed.author.clone(),
                        matches: many.len(),
                    });
                }
            };
            report.outcomes.push(outcome);
        }

        Ok(report)
    }
}

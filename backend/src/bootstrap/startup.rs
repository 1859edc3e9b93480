//! Startup orchestration: open the catalogue store and seed it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::{info, warn};

use crate::bootstrap::config::BookstoreSettings;
use crate::domain::ports::BookRepository;
use crate::domain::{
    BookDetails, BookSeeder, BookSeedingError, SeedCatalogue, SeedReport, default_seed_books,
};
use crate::outbound::memory::InMemoryBookRepository;
use crate::outbound::persistence::{
    CollectionState, MongoBookRepository, StoreConnection, StoreError, ensure_collection,
    ensure_identity_index,
};

/// Errors returned while bringing the catalogue up.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The document store could not be connected or provisioned.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The seed file could not be read.
    #[error("failed to read seed file at {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The seed file is not a valid catalogue.
    #[error("failed to parse seed file at {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Seeding failed or found a corrupted store.
    #[error(transparent)]
    Seeding(#[from] BookSeedingError),
}

/// The repository the server runs on.
pub enum CatalogueStore {
    /// Document store plus the client that must be shut down on exit.
    Document {
        repository: Arc<MongoBookRepository>,
        connection: StoreConnection,
    },
    /// Process-local store used when no database is configured.
    InMemory(Arc<InMemoryBookRepository>),
}

impl CatalogueStore {
    /// Seed whichever repository is active.
    ///
    /// # Errors
    ///
    /// See [`seed_catalogue_on_startup`].
    pub async fn seed(
        &self,
        settings: &BookstoreSettings,
    ) -> Result<Option<SeedReport>, StartupError> {
        match self {
            Self::Document { repository, .. } => {
                seed_catalogue_on_startup(settings, repository.clone()).await
            }
            Self::InMemory(repository) => {
                seed_catalogue_on_startup(settings, repository.clone()).await
            }
        }
    }

    /// Release store resources.
    pub async fn shutdown(self) {
        if let Self::Document { connection, .. } = self {
            connection.shutdown().await;
        }
    }
}

/// Connect to the configured store, or fall back to memory.
///
/// With a database URI the collection is provisioned and, unless disabled,
/// the unique identity index is created. An index build failure only logs a
/// warning.
///
/// # Errors
///
/// Returns [`StartupError::Store`] when the store cannot be reached or the
/// collection cannot be provisioned.
pub async fn open_catalogue_store(
    settings: &BookstoreSettings,
) -> Result<CatalogueStore, StartupError> {
    let Some(uri) = settings.database_uri() else {
        warn!(
            "no database URI configured (BOOKSTORE_DATABASE_URI or DATABASE_URI); \
             serving from a process-local store that is lost on exit"
        );
        let repository = if settings.enforce_unique_index() {
            InMemoryBookRepository::with_unique_identity()
        } else {
            InMemoryBookRepository::new()
        };
        return Ok(CatalogueStore::InMemory(Arc::new(repository)));
    };

    let connection = StoreConnection::connect(settings.store_config(uri)).await?;
    let collection = ensure_collection(&connection).await?;
    if collection.state() == CollectionState::Created {
        info!(collection = %settings.collection_name(), "provisioned empty catalogue");
    }
    if settings.enforce_unique_index() {
        if let Err(error) = ensure_identity_index(&connection).await {
            warn!(%error, "unique book index unavailable; relying on service-level duplicate checks");
        }
    }

    Ok(CatalogueStore::Document {
        repository: Arc::new(MongoBookRepository::new(
            collection,
            connection.config().operation_timeout(),
        )),
        connection,
    })
}

/// Apply the seed catalogue when seeding is enabled.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use bookstore::bootstrap::{BookstoreSettings, seed_catalogue_on_startup};
/// use bookstore::outbound::memory::InMemoryBookRepository;
///
/// # async fn run(settings: BookstoreSettings) -> Result<(), Box<dyn std::error::Error>> {
/// let store = Arc::new(InMemoryBookRepository::new());
/// let report = seed_catalogue_on_startup(&settings, store).await?;
/// assert!(report.is_some() == settings.seed_enabled());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`StartupError`] when the seed file cannot be loaded, a seed is
/// invalid, the store holds duplicate seeds or the store fails.
pub async fn seed_catalogue_on_startup<R>(
    settings: &BookstoreSettings,
    repository: Arc<R>,
) -> Result<Option<SeedReport>, StartupError>
where
    R: BookRepository,
{
    if !settings.seed_enabled() {
        info!(reason = "disabled", "catalogue seeding skipped");
        return Ok(None);
    }

    let seeds = match settings.seed_path.as_deref() {
        Some(path) => load_seed_file(path)?,
        None => default_seed_books(),
    };
    let report = BookSeeder::new(repository).ensure_seeded(&seeds).await?;
    info!(
        inserted = report.inserted(),
        already_present = report.already_present(),
        conflicting = report.conflicting(),
        "catalogue seeding finished"
    );

    Ok(Some(report))
}

/// Read a JSON seed catalogue through a capability on its parent directory.
///
/// # Errors
///
/// Returns [`StartupError::SeedRead`] for I/O failures and
/// [`StartupError::SeedParse`] for malformed content.
pub fn load_seed_file(path: &Path) -> Result<Vec<BookDetails>, StartupError> {
    let read_error = |source: std::io::Error| StartupError::SeedRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seed path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir
        .read_to_string(Path::new(file_name))
        .map_err(read_error)?;

    let catalogue =
        SeedCatalogue::from_json(&contents).map_err(|source| StartupError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(catalogue.into_books())
}

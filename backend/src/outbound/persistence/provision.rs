//! Collection and index provisioning run once at startup.

use std::time::Duration;

use mongodb::{Collection, IndexModel};
use mongodb::options::IndexOptions;
use tracing::info;

use super::connection::{StoreConnection, StoreError};
use super::documents::{BookDocument, identity_index_keys};
use super::error_mapping::{NAMESPACE_EXISTS_CODE, server_code};

/// Name of the unique (name, author, pages, year) index.
pub const IDENTITY_INDEX_NAME: &str = "book_identity_unique";

/// Whether provisioning had to create the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionState {
    Created,
    Existing,
}

/// Handle on the provisioned catalogue collection.
#[derive(Clone, Debug)]
pub struct BookCollection {
    collection: Collection<BookDocument>,
    state: CollectionState,
}

impl BookCollection {
    pub(crate) fn new(collection: Collection<BookDocument>, state: CollectionState) -> Self {
        Self { collection, state }
    }

    /// Whether provisioning created the collection.
    pub fn state(&self) -> CollectionState {
        self.state
    }

    pub(crate) fn into_inner(self) -> Collection<BookDocument> {
        self.collection
    }
}

async fn bounded<T, F>(deadline: Duration, step: &str, fut: F) -> Result<T, StoreError>
where
    F: std::future::Future<Output = Result<T, mongodb::error::Error>>,
{
    tokio::time::timeout(deadline, fut)
        .await
        .map_err(|_| StoreError::timeout(step, deadline))?
        .map_err(|err| StoreError::provision(err.to_string()))
}

/// Make sure the configured collection exists and return a handle on it.
///
/// Idempotent. A concurrent creator winning the race is not an error.
///
/// # Errors
///
/// Returns [`StoreError`] when listing or creating fails or overruns the
/// operation deadline.
pub async fn ensure_collection(connection: &StoreConnection) -> Result<BookCollection, StoreError> {
    let state = provision_collection(connection).await?;
    Ok(BookCollection::new(connection.collection(), state))
}

async fn provision_collection(connection: &StoreConnection) -> Result<CollectionState, StoreError> {
    let config = connection.config();
    let deadline = config.operation_timeout();
    let database = connection.database();
    let name = config.collection_name();

    let existing = bounded(deadline, "list collections", async {
        database.list_collection_names().await
    })
    .await?;
    if existing.iter().any(|candidate| candidate == name) {
        info!(collection = %name, "collection already present");
        return Ok(CollectionState::Existing);
    }

    let created = tokio::time::timeout(deadline, async { database.create_collection(name).await })
        .await
        .map_err(|_| StoreError::timeout("create collection", deadline))?;
    match created {
        Ok(()) => {
            info!(collection = %name, "collection created");
            Ok(CollectionState::Created)
        }
        Err(err) if server_code(&err) == Some(NAMESPACE_EXISTS_CODE) => {
            info!(collection = %name, "collection created concurrently");
            Ok(CollectionState::Existing)
        }
        Err(err) => Err(StoreError::provision(err.to_string())),
    }
}

/// Create the unique identity index if it is missing.
///
/// # Errors
///
/// Returns [`StoreError`] when the store refuses the index, typically
/// because duplicates are already stored.
pub async fn ensure_identity_index(connection: &StoreConnection) -> Result<(), StoreError> {
    let collection = connection.collection::<BookDocument>();
    let index = IndexModel::builder()
        .keys(identity_index_keys())
        .options(
            IndexOptions::builder()
                .unique(true)
                .name(IDENTITY_INDEX_NAME.to_owned())
                .build(),
        )
        .build();

    bounded(
        connection.config().operation_timeout(),
        "create identity index",
        async { collection.create_index(index).await },
    )
    .await?;
    info!(index = IDENTITY_INDEX_NAME, "identity index ensured");
    Ok(())
}

//! Document-store implementation of [`BookRepository`].

use std::time::Duration;

use async_trait::async_trait;
use bson::doc;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::options::ReturnDocument;

use crate::domain::ports::{BookRepository, BookRepositoryError};
use crate::domain::{Book, BookDetails, BookId, BookIdentity};

use super::provision::BookCollection;
use super::documents::{
    BookDocument, exact_filter, id_filter, identity_filter, replacement_update,
};
use super::error_mapping::with_deadline;

/// Book repository backed by one collection.
///
/// Each method is a single round trip bounded by the configured operation
/// deadline; nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct MongoBookRepository {
    collection: Collection<BookDocument>,
    deadline: Duration,
}

impl MongoBookRepository {
    /// Repository over a provisioned collection, bounding each call by
    /// `deadline`.
    pub fn new(collection: BookCollection, deadline: Duration) -> Self {
        Self {
            collection: collection.into_inner(),
            deadline,
        }
    }

    async fn find_many(
        &self,
        operation: &str,
        filter: bson::Document,
    ) -> Result<Vec<Book>, BookRepositoryError> {
        let collection = &self.collection;
        let documents: Vec<BookDocument> = with_deadline(self.deadline, operation, async {
            let cursor = collection.find(filter).await?;
            cursor.try_collect().await
        })
        .await?;
        documents.into_iter().map(BookDocument::into_book).collect()
    }
}

#[async_trait]
impl BookRepository for MongoBookRepository {
    async fn list_all(&self) -> Result<Vec<Book>, BookRepositoryError> {
        self.find_many("list_all", doc! {}).await
    }

    async fn find_exact(&self, details: &BookDetails) -> Result<Vec<Book>, BookRepositoryError> {
        self.find_many("find_exact", exact_filter(details)).await
    }

    async fn count_by_identity(&self, identity: &BookIdentity) -> Result<u64, BookRepositoryError> {
        let collection = &self.collection;
        let filter = identity_filter(identity);
        with_deadline(self.deadline, "count_by_identity", async {
            collection.count_documents(filter).await
        })
        .await
    }

    async fn insert(&self, details: &BookDetails) -> Result<Book, BookRepositoryError> {
        let collection = &self.collection;
        let document = BookDocument::from_details(details);
        let inserted = with_deadline(self.deadline, "insert", async {
            collection.insert_one(&document).await
        })
        .await?;
        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| BookRepositoryError::query("store assigned a non-object id"))?;
        Ok(Book::new(BookId::from_object_id(id), details.clone()))
    }

    async fn replace(
        &self,
        id: &BookId,
        details: &BookDetails,
    ) -> Result<Option<Book>, BookRepositoryError> {
        let collection = &self.collection;
        let filter = id_filter(id);
        let update = replacement_update(details);
        let updated = with_deadline(self.deadline, "replace", async {
            collection
                .find_one_and_update(filter, update)
                .return_document(ReturnDocument::After)
                .await
        })
        .await?;
        updated.map(BookDocument::into_book).transpose()
    }

    async fn delete(&self, id: &BookId) -> Result<u64, BookRepositoryError> {
        let collection = &self.collection;
        let filter = id_filter(id);
        let result = with_deadline(self.deadline, "delete", async {
            collection.delete_one(filter).await
        })
        .await?;
        Ok(result.deleted_count)
    }
}

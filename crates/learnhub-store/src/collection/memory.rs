//! In-memory collection for testing.
//!
//! This module provides a [`Collection`] implementation backed by a
//! `Vec`, interpreting [`ScrollQuery`] through its reference evaluation.
//! It is the query double used across the workspace's tests.
//!
//! # Feature Flag
//!
//! This module is only available when the `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! learnhub-store = { version = "...", features = ["test-utils"] }
//! ```

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Collection, Document};
use crate::error::BoxError;
use crate::query::ScrollQuery;

/// An in-memory, query-capable collection of documents.
///
/// Reads clone matching documents, so the stored type must be `Clone`.
/// Writes exist only so tests can stage mutation between page fetches.
#[derive(Debug, Default)]
pub struct MemoryCollection<D> {
    documents: RwLock<Vec<D>>,
}

impl<D> MemoryCollection<D>
where
    D: Document + Clone,
{
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Creates a collection seeded with the given documents.
    pub fn from_documents(documents: Vec<D>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    /// Inserts a document.
    pub async fn insert(&self, document: D) {
        self.documents.write().await.push(document);
    }

    /// Removes a document by identifier, returning whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|doc| doc.id() != id);
        documents.len() < before
    }

    /// Returns the number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Returns whether the collection is empty.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl<D> Collection for MemoryCollection<D>
where
    D: Document + Clone,
{
    type Document = D;

    async fn find(&self, query: &ScrollQuery) -> Result<Vec<D>, BoxError> {
        let documents = self.documents.read().await;

        let mut rows: Vec<D> = documents
            .iter()
            .filter(|doc| query.matches(*doc))
            .cloned()
            .collect();
        rows.sort_by(|a, b| query.compare(a, b));
        rows.truncate(usize::try_from(query.fetch_limit()).unwrap_or(usize::MAX));

        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<D>, BoxError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|doc| doc.id() == id).cloned())
    }
}

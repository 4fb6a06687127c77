//! The collection seam the query engine reads through.
//!
//! The engine never talks to a datastore directly; it is handed a
//! [`Collection`] implementation at construction time and only reads.
//! Backends translate the [`ScrollQuery`] description into their own
//! query syntax, or lean on its reference evaluation the way the
//! in-memory implementation does.

#[cfg(any(test, feature = "test-utils"))]
mod memory;

use async_trait::async_trait;
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub use memory::MemoryCollection;

use crate::error::BoxError;
use crate::query::ScrollQuery;
use crate::types::pagination::Cursor;

/// A document the scroll engine can page over.
///
/// Implementations expose the unique identifier used as the sort
/// tiebreak, the name field used by the substring filter, and a string
/// projection of each sortable field.
pub trait Document: Send + Sync {
    /// Unique identifier of this document.
    fn id(&self) -> Uuid;

    /// Value of the name field, targeted by the substring filter.
    fn name(&self) -> &str;

    /// Value of a sortable field, as compared and carried in cursors.
    ///
    /// Only fields from the domain's allow-list are ever requested, since
    /// sort fields are validated before a query is built.
    fn sort_key(&self, field: &str) -> String;

    /// The resume point a page ending at this document hands out.
    fn cursor(&self, sort_field: &str) -> Cursor {
        Cursor::new(self.sort_key(sort_field), self.id())
    }
}

/// A query-capable handle to a collection of documents.
///
/// One unique identifier per document plus the sortable fields named by
/// the domain allow-list is all a backend has to provide. Errors are
/// type-erased here; the engine wraps them as backend failures and logs
/// the cause without surfacing it.
#[async_trait]
pub trait Collection: Send + Sync {
    /// The document type stored in this collection.
    type Document: Document;

    /// Executes a filtered, ordered, limited read.
    ///
    /// Implementations must apply the query's filter and continuation
    /// predicate, order by `(sort field, identifier)` as requested, and
    /// return at most [`ScrollQuery::fetch_limit`] rows.
    async fn find(&self, query: &ScrollQuery) -> Result<Vec<Self::Document>, BoxError>;

    /// Fetches a single document by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Self::Document>, BoxError>;
}

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Tracing target constants for consistent logging.

/// Tracing target for query execution and page assembly.
///
/// Use this target for logging scroll query execution, results, and
/// query-related errors.
pub const TRACING_TARGET_QUERY: &str = "learnhub_store::query";

/// Tracing target for collection access.
///
/// Use this target for logging reads against the backing collection and
/// backend failures.
pub const TRACING_TARGET_COLLECTION: &str = "learnhub_store::collection";

mod collection;
mod error;
pub mod query;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub use collection::MemoryCollection;
pub use collection::{Collection, Document};
pub use error::{BoxError, StoreError, StoreResult, ValidationError};
pub use query::{ScrollOptions, ScrollQuery, execute_scroll_query, fetch_document};
pub use types::pagination::{Cursor, DEFAULT_LIMIT, MAX_LIMIT, Page, PageParams, PageRequest};
pub use types::sorting::{SortOrder, SortSpec};

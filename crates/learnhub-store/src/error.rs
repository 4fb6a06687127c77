//! Error types for store and query operations.
//!
//! Two kinds of failure exist at this layer: client-input validation
//! failures, which name the offending parameter and the allowed
//! range/set, and backend failures, which are surfaced as a generic
//! error so storage internals never leak to callers.

use thiserror::Error;

/// Type-erased error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A client-input validation failure.
///
/// Every variant corresponds to one rule of page-request validation and
/// renders the exact message surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `limit` did not parse as an integer.
    #[error("limit must be an integer")]
    LimitNotInteger,

    /// `limit` was below the minimum page size.
    #[error("limit must be >= 1")]
    LimitTooSmall,

    /// `limit` was above the maximum page size.
    #[error("limit must be <= 100")]
    LimitTooLarge,

    /// `sort_by` was not a member of the domain's allow-list.
    #[error("sort_by must be one of [{allowed}]")]
    SortFieldNotAllowed {
        /// The allowed sort fields, comma-separated.
        allowed: String,
    },

    /// `order` was not exactly `asc` or `desc`.
    #[error("order must be 'asc' or 'desc'")]
    InvalidSortOrder,

    /// `after_id` did not decode to a structurally valid cursor.
    #[error("after_id must be a valid cursor")]
    MalformedCursor,
}

impl ValidationError {
    /// Builds a [`ValidationError::SortFieldNotAllowed`] naming the allowed set.
    pub fn sort_field_not_allowed(allowed_fields: &[&str]) -> Self {
        Self::SortFieldNotAllowed {
            allowed: allowed_fields.join(", "),
        }
    }
}

/// Error type for all document store operations.
#[derive(Debug, Error)]
#[must_use = "store errors should be handled appropriately"]
pub enum StoreError {
    /// A request parameter failed validation.
    ///
    /// Always recoverable by the caller correcting its input; never
    /// retried automatically.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backing collection could not be queried.
    ///
    /// Deliberately generic: the underlying cause is logged where the
    /// failure occurred, not echoed to callers.
    #[error("document store unavailable")]
    Backend(#[source] BoxError),
}

impl StoreError {
    /// Wraps a backend failure.
    pub fn backend(source: impl Into<BoxError>) -> Self {
        Self::Backend(source.into())
    }

    /// Returns true if this error was caused by client input (4xx equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns whether this error indicates a transient failure that might
    /// succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Backend(_))
    }
}

/// Specialized [`Result`] type for document store operations.
pub type StoreResult<T, E = StoreError> = Result<T, E>;

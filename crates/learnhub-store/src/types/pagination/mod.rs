//! Infinite-scroll pagination types.
//!
//! Keyset (cursor) pagination resumes a sorted scan from the last seen
//! row instead of counting and skipping rows, so performance stays
//! constant at any depth and pages stay stable under concurrent writes.

mod cursor;
mod page;
mod request;

pub use cursor::Cursor;
pub use page::Page;
pub use request::{DEFAULT_LIMIT, MAX_LIMIT, PageParams, PageRequest};

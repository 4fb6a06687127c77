//! Query construction for infinite-scroll reads.
//!
//! A [`ScrollQuery`] is the executable description built from a
//! validated [`PageRequest`]: the optional name filter, the optional
//! resume point, the sort specification, and the over-fetch limit. The
//! type also owns the reference evaluation of that description — the
//! continuation predicate and the total order — so every backend agrees
//! on what the query means.

mod scroll;

use std::cmp::Ordering;

pub use scroll::{ScrollOptions, execute_scroll_query, fetch_document};

use crate::collection::Document;
use crate::types::pagination::{Cursor, PageRequest};
use crate::types::sorting::SortSpec;

/// A filtered, ordered, limited read over one collection.
#[derive(Debug, Clone)]
pub struct ScrollQuery {
    name_contains: Option<String>,
    resume: Option<Cursor>,
    sort: SortSpec,
    fetch_limit: i64,
}

impl ScrollQuery {
    /// Builds the query for a validated page request.
    pub fn build(request: &PageRequest) -> Self {
        Self {
            // Lowered once here; the filter is case-insensitive.
            name_contains: request.name_filter().map(str::to_lowercase),
            resume: request.after().cloned(),
            sort: request.sort().clone(),
            fetch_limit: request.fetch_limit(),
        }
    }

    /// The lowercased substring the name field must contain, if any.
    #[inline]
    pub fn name_contains(&self) -> Option<&str> {
        self.name_contains.as_deref()
    }

    /// The resume point, if this is a continuation request.
    #[inline]
    pub fn resume(&self) -> Option<&Cursor> {
        self.resume.as_ref()
    }

    /// The validated sort specification.
    #[inline]
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// Number of rows to fetch: the page size plus the extra row that
    /// detects whether more pages exist.
    #[inline]
    pub fn fetch_limit(&self) -> i64 {
        self.fetch_limit
    }

    /// Returns whether a document belongs to this query's result set,
    /// combining the name filter and the continuation predicate.
    pub fn matches<D: Document + ?Sized>(&self, doc: &D) -> bool {
        if let Some(needle) = self.name_contains.as_deref()
            && !doc.name().to_lowercase().contains(needle)
        {
            return false;
        }

        self.is_past_resume(doc)
    }

    /// The keyset continuation predicate.
    ///
    /// A document is part of the next page when its sort value lies
    /// strictly past the resume point in the requested direction, or is
    /// equal to it with a strictly greater identifier. The identifier
    /// leg keeps the scan well-defined when many documents share a sort
    /// value, and because the resume point carries the sort value it was
    /// issued with, the predicate works unchanged after the referenced
    /// document has been deleted.
    pub fn is_past_resume<D: Document + ?Sized>(&self, doc: &D) -> bool {
        let Some(resume) = &self.resume else {
            return true;
        };

        let key = doc.sort_key(self.sort.field());
        match key.cmp(&resume.sort_value) {
            Ordering::Equal => doc.id() > resume.id,
            ordering if self.sort.order().is_asc() => ordering == Ordering::Greater,
            ordering => ordering == Ordering::Less,
        }
    }

    /// The total order of the scan: the sort field in the requested
    /// direction, then the identifier ascending.
    ///
    /// The identifier tiebreak is mandatory and non-configurable; it is
    /// what makes the scan deterministic and resumable under duplicate
    /// sort values.
    pub fn compare<D: Document + ?Sized>(&self, a: &D, b: &D) -> Ordering {
        let field = self.sort.field();
        let primary = a.sort_key(field).cmp(&b.sort_key(field));
        let primary = if self.sort.order().is_desc() {
            primary.reverse()
        } else {
            primary
        };

        primary.then_with(|| a.id().cmp(&b.id()))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::types::pagination::PageParams;
    use crate::types::sorting::SortOrder;

    #[derive(Debug, Clone)]
    struct Doc {
        id: Uuid,
        name: String,
    }

    impl Doc {
        fn new(name: &str) -> Self {
            Self {
                id: Uuid::new_v4(),
                name: name.to_owned(),
            }
        }
    }

    impl Document for Doc {
        fn id(&self) -> Uuid {
            self.id
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn sort_key(&self, _field: &str) -> String {
            self.name.clone()
        }
    }

    fn query(params: PageParams) -> ScrollQuery {
        let request =
            PageRequest::from_params(params, &["name"], "name").expect("params are valid");
        ScrollQuery::build(&request)
    }

    #[test]
    fn build_carries_the_request_through() {
        let q = query(
            PageParams::new()
                .with_name("Rust")
                .with_limit(25)
                .with_order("desc"),
        );

        assert_eq!(q.name_contains(), Some("rust"));
        assert_eq!(q.fetch_limit(), 26);
        assert_eq!(q.sort().order(), SortOrder::Desc);
        assert!(q.resume().is_none());
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let q = query(PageParams::new().with_name("AL"));

        assert!(q.matches(&Doc::new("alpha")));
        assert!(q.matches(&Doc::new("Advanced Algebra")));
        assert!(!q.matches(&Doc::new("beta")));
    }

    #[test]
    fn continuation_is_strictly_past_the_resume_point() {
        let beta = Doc::new("beta");
        let cursor = beta.cursor("name");
        let q = query(PageParams::new().with_after_id(cursor.encode()));

        assert!(q.matches(&Doc::new("gamma")));
        assert!(!q.matches(&Doc::new("alpha")));
        // The resume document itself is excluded.
        assert!(!q.matches(&beta));
    }

    #[test]
    fn continuation_reverses_with_descending_order() {
        let beta = Doc::new("beta");
        let q = query(
            PageParams::new()
                .with_order("desc")
                .with_after_id(beta.cursor("name").encode()),
        );

        assert!(q.matches(&Doc::new("alpha")));
        assert!(!q.matches(&Doc::new("gamma")));
    }

    #[test]
    fn identifier_breaks_ties_on_equal_sort_values() {
        let a = Doc::new("same");
        let b = Doc::new("same");
        let (low, high) = if a.id < b.id { (a, b) } else { (b, a) };

        let q = query(PageParams::new().with_after_id(low.cursor("name").encode()));
        assert!(q.matches(&high), "greater id past an equal sort value");
        assert!(!q.matches(&low), "resume document is excluded");

        // The tiebreak stays ascending even when the scan is descending.
        let q = query(
            PageParams::new()
                .with_order("desc")
                .with_after_id(low.cursor("name").encode()),
        );
        assert!(q.matches(&high));
    }

    #[test]
    fn order_is_total_and_deterministic() {
        let a = Doc::new("same");
        let b = Doc::new("same");
        let c = Doc::new("other");

        let q = query(PageParams::new());
        assert_eq!(q.compare(&c, &a), std::cmp::Ordering::Less);
        assert_eq!(q.compare(&a, &b), a.id.cmp(&b.id));

        let q = query(PageParams::new().with_order("desc"));
        assert_eq!(q.compare(&c, &a), std::cmp::Ordering::Greater);
        // Ties still resolve by ascending identifier.
        assert_eq!(q.compare(&a, &b), a.id.cmp(&b.id));
    }

    #[test]
    fn cursor_from_a_different_sort_spec_is_not_an_error() {
        // A cursor issued under one sort field used with another is
        // undefined but must behave like any other resume point.
        let doc = Doc::new("whatever");
        let cursor = Cursor::new("zzzz", doc.id());
        let q = query(PageParams::new().with_after_id(cursor.encode()));

        assert!(!q.matches(&Doc::new("alpha")));
    }
}

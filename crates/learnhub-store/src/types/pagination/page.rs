//! Result assembly for over-fetched scroll queries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::Serialize;

use super::Cursor;

/// One page of a scrolled result set.
///
/// Serializes as `{items, limit, has_more, next_cursor}` with
/// `next_cursor` explicitly `null` on the final page.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Page<T> {
    /// The documents in this page, at most `limit` of them.
    pub items: Vec<T>,
    /// The requested page size, echoed back.
    pub limit: i64,
    /// Whether at least one more document exists beyond this page.
    pub has_more: bool,
    /// Cursor resuming after the last item, present only when more exist.
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Assembles a page from over-fetched rows.
    ///
    /// `items` is expected to hold up to `limit + 1` rows. Receiving the
    /// extra row proves more data exists: it is dropped, `has_more` is
    /// set, and `next_cursor` encodes the last row that was kept.
    ///
    /// `cursor_fn` extracts the resume point from an item, conventionally
    /// [`Document::cursor`].
    ///
    /// [`Document::cursor`]: crate::Document::cursor
    pub fn new<F>(mut items: Vec<T>, limit: i64, cursor_fn: F) -> Self
    where
        F: Fn(&T) -> Cursor,
    {
        let has_more = items.len() as i64 > limit;

        // Remove the extra item used to detect more pages
        if has_more {
            items.pop();
        }

        let next_cursor = if has_more {
            items.last().map(|item| cursor_fn(item).encode())
        } else {
            None
        };

        Self {
            items,
            limit,
            has_more,
            next_cursor,
        }
    }

    /// Creates an empty page.
    pub fn empty(limit: i64) -> Self {
        Self {
            items: Vec::new(),
            limit,
            has_more: false,
            next_cursor: None,
        }
    }

    /// Maps the items to a different type.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            limit: self.limit,
            has_more: self.has_more,
            next_cursor: self.next_cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn cursor_for(item: &i32) -> Cursor {
        Cursor::new(item.to_string(), Uuid::new_v4())
    }

    #[test]
    fn full_fetch_means_more_pages() {
        let items: Vec<i32> = (1..=11).collect();
        let page = Page::new(items, 10, cursor_for);

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.limit, 10);
        assert!(page.has_more);

        // The cursor points at the last *kept* item, not the dropped one.
        let cursor = Cursor::decode(page.next_cursor.as_deref().expect("cursor present"))
            .expect("engine-issued cursors decode");
        assert_eq!(cursor.sort_value, "10");
    }

    #[test]
    fn short_fetch_means_last_page() {
        let items: Vec<i32> = (1..=3).collect();
        let page = Page::new(items, 10, cursor_for);

        assert_eq!(page.items.len(), 3);
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn exactly_limit_rows_is_still_the_last_page() {
        let items: Vec<i32> = (1..=10).collect();
        let page = Page::new(items, 10, cursor_for);

        assert_eq!(page.items.len(), 10);
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn envelope_serializes_null_cursor_on_the_final_page() {
        let page = Page::new(vec![1, 2], 5, cursor_for);
        let json = serde_json::to_value(&page).expect("serialize");

        assert_eq!(json["items"], serde_json::json!([1, 2]));
        assert_eq!(json["limit"], 5);
        assert_eq!(json["has_more"], false);
        assert!(json["next_cursor"].is_null());
        assert!(json.get("next_cursor").is_some(), "field must not be skipped");
    }
}

//! The composed infinite-scroll read path.
//!
//! One call per page: validate the raw parameters, build the query,
//! over-fetch by one row, assemble the page. Nothing is held between
//! calls; the only state threading across pages is the client-held
//! cursor string.

use uuid::Uuid;

use super::ScrollQuery;
use crate::collection::{Collection, Document};
use crate::{TRACING_TARGET_COLLECTION, TRACING_TARGET_QUERY};
use crate::error::{StoreError, StoreResult};
use crate::types::pagination::{Page, PageParams, PageRequest};

/// Per-domain query options: the sort-field allow-list and the field
/// used when the client does not send `sort_by`.
#[derive(Debug, Clone, Copy)]
pub struct ScrollOptions<'a> {
    /// Fields clients may sort by.
    pub allowed_sort_fields: &'a [&'a str],
    /// Sort field applied when `sort_by` is absent.
    pub default_sort_field: &'a str,
}

/// Fetches one page of sorted, filtered documents.
///
/// Validates `params` against the domain's options, executes a
/// `limit + 1` read through the collection, and assembles the
/// `{items, limit, has_more, next_cursor}` page. Validation failures
/// are client-input errors; collection failures are logged with their
/// cause and surfaced as a generic backend error.
pub async fn execute_scroll_query<C>(
    collection: &C,
    params: PageParams,
    options: ScrollOptions<'_>,
) -> StoreResult<Page<C::Document>>
where
    C: Collection,
{
    let request =
        PageRequest::from_params(params, options.allowed_sort_fields, options.default_sort_field)?;
    let query = ScrollQuery::build(&request);

    let rows = collection.find(&query).await.map_err(|cause| {
        tracing::error!(
            target: TRACING_TARGET_QUERY,
            error = %cause,
            sort_by = query.sort().field(),
            "Scroll query failed against the backing collection"
        );
        StoreError::backend(cause)
    })?;

    let sort_field = request.sort().field().to_owned();
    let page = Page::new(rows, request.limit(), |doc: &C::Document| {
        doc.cursor(&sort_field)
    });

    tracing::debug!(
        target: TRACING_TARGET_QUERY,
        items = page.items.len(),
        has_more = page.has_more,
        "Scroll page assembled"
    );

    Ok(page)
}

/// Fetches a single document by identifier.
///
/// Collection failures are handled the same way as in
/// [`execute_scroll_query`]: logged with their cause, surfaced generically.
pub async fn fetch_document<C>(collection: &C, id: Uuid) -> StoreResult<Option<C::Document>>
where
    C: Collection,
{
    collection.find_by_id(id).await.map_err(|cause| {
        tracing::error!(
            target: TRACING_TARGET_COLLECTION,
            error = %cause,
            document_id = %id,
            "Document lookup failed against the backing collection"
        );
        StoreError::backend(cause)
    })
}

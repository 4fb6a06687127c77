//! The generic catalog read service.
//!
//! Five domains expose the same two operations over different
//! collections, so one [`DocumentService`] serves them all: it is
//! constructed with an explicit collection handle and a [`Domain`]
//! descriptor, consults the authorization policy, and delegates the
//! actual paging to the scroll engine in `learnhub-store`.

use std::fmt;
use std::sync::Arc;

use learnhub_store::{Collection, Page, PageParams, execute_scroll_query, fetch_document};
use uuid::Uuid;

use crate::TRACING_TARGET;
use crate::auth::{AllowAll, Authorize, Operation, Principal};
use crate::error::{Error, Result};
use crate::model::{self, Curriculum, Domain, Path, Rating, Resource, Review};

/// Read service over one catalog domain.
///
/// Holds no state between calls beyond its configuration; every page
/// request is independent, resumed only through the client-held cursor.
pub struct DocumentService<C> {
    domain: &'static Domain,
    collection: Arc<C>,
    authorizer: Arc<dyn Authorize>,
}

// Not derived: a derive would require `C: Clone`, but only the handles
// are cloned.
impl<C> Clone for DocumentService<C> {
    fn clone(&self) -> Self {
        Self {
            domain: self.domain,
            collection: Arc::clone(&self.collection),
            authorizer: Arc::clone(&self.authorizer),
        }
    }
}

impl<C> fmt::Debug for DocumentService<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentService")
            .field("domain", &self.domain.name)
            .finish_non_exhaustive()
    }
}

impl<C> DocumentService<C>
where
    C: Collection,
{
    /// Creates a service for `domain` reading through `collection`.
    ///
    /// The authorization policy defaults to [`AllowAll`]; override it
    /// with [`with_authorizer`](Self::with_authorizer).
    pub fn new(domain: &'static Domain, collection: C) -> Self {
        Self {
            domain,
            collection: Arc::new(collection),
            authorizer: Arc::new(AllowAll),
        }
    }

    /// Replaces the authorization policy.
    pub fn with_authorizer<A>(mut self, authorizer: A) -> Self
    where
        A: Authorize + 'static,
    {
        self.authorizer = Arc::new(authorizer);
        self
    }

    /// The domain this service reads.
    pub fn domain(&self) -> &'static Domain {
        self.domain
    }

    /// Fetches one page of sorted, filtered documents.
    pub async fn list(&self, principal: &Principal, params: PageParams) -> Result<Page<C::Document>> {
        self.check_access(principal, Operation::Read)?;

        let page =
            execute_scroll_query(self.collection.as_ref(), params, self.domain.scroll_options())
                .await?;

        tracing::info!(
            target: TRACING_TARGET,
            domain = self.domain.name,
            user_id = %principal.user_id,
            items = page.items.len(),
            has_more = page.has_more,
            "Retrieved document batch"
        );

        Ok(page)
    }

    /// Fetches a single document by identifier.
    pub async fn get(&self, principal: &Principal, id: Uuid) -> Result<C::Document> {
        self.check_access(principal, Operation::Read)?;

        let document = fetch_document(self.collection.as_ref(), id).await?.ok_or_else(|| {
            Error::not_found().with_message(format!("{} {id} not found", self.domain.name))
        })?;

        tracing::info!(
            target: TRACING_TARGET,
            domain = self.domain.name,
            user_id = %principal.user_id,
            document_id = %id,
            "Retrieved document"
        );

        Ok(document)
    }

    fn check_access(&self, principal: &Principal, operation: Operation) -> Result<()> {
        if !self.authorizer.authorize(principal, operation) {
            tracing::warn!(
                target: TRACING_TARGET,
                domain = self.domain.name,
                user_id = %principal.user_id,
                "Authorization denied"
            );
            return Err(Error::authorization().with_message(format!(
                "insufficient permissions to read {} documents",
                self.domain.name
            )));
        }

        Ok(())
    }
}

impl<C> DocumentService<C>
where
    C: Collection<Document = Curriculum>,
{
    /// Creates the curriculum domain service.
    pub fn curriculum(collection: C) -> Self {
        Self::new(&model::curriculum::DOMAIN, collection)
    }
}

impl<C> DocumentService<C>
where
    C: Collection<Document = Rating>,
{
    /// Creates the rating domain service.
    pub fn rating(collection: C) -> Self {
        Self::new(&model::rating::DOMAIN, collection)
    }
}

impl<C> DocumentService<C>
where
    C: Collection<Document = Review>,
{
    /// Creates the review domain service.
    pub fn review(collection: C) -> Self {
        Self::new(&model::review::DOMAIN, collection)
    }
}

impl<C> DocumentService<C>
where
    C: Collection<Document = Resource>,
{
    /// Creates the resource domain service.
    pub fn resource(collection: C) -> Self {
        Self::new(&model::resource::DOMAIN, collection)
    }
}

impl<C> DocumentService<C>
where
    C: Collection<Document = Path>,
{
    /// Creates the path domain service.
    pub fn path(collection: C) -> Self {
        Self::new(&model::path::DOMAIN, collection)
    }
}

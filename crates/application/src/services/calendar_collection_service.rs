//! Calendar collection service
//!
//! Drives a [`CalendarBackend`] the way a protocol engine does when it answers
//! collection listings and single-object fetches.

use std::fmt;

use futures::future::join_all;
use tracing::{debug, info, instrument};

use crate::{
    backend::{CalendarBackend, CalendarObject, CollectionDescriptor},
    error::ApplicationError,
    request_context::RequestContext,
};

/// Serves one calendar collection through its backend
pub struct CalendarCollectionService<B> {
    backend: B,
}

impl<B: CalendarBackend> fmt::Debug for CalendarCollectionService<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarCollectionService")
            .field("collection", &self.backend.collection_uri())
            .finish_non_exhaustive()
    }
}

impl<B: CalendarBackend> CalendarCollectionService<B> {
    /// Create a new collection service
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The wrapped backend
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Collection properties
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    pub async fn collection_descriptor(
        &self,
        ctx: &RequestContext,
    ) -> Result<CollectionDescriptor, ApplicationError> {
        self.backend.descriptor(ctx).await
    }

    /// Every object of the collection, in listing order
    ///
    /// Records are prepared concurrently; skipped records are left out.
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id(), account_id = %ctx.account_id()))]
    pub async fn calendar_objects(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<CalendarObject>, ApplicationError> {
        let records = self.backend.list_objects(ctx, None).await?;
        let listed = records.len();

        let prepared = join_all(
            records
                .iter()
                .map(|record| self.backend.prepare_data(ctx, record)),
        )
        .await;

        let objects: Vec<CalendarObject> = prepared
            .into_iter()
            .filter_map(|p| p.into_object())
            .collect();

        info!(
            collection = self.backend.collection_uri(),
            listed,
            served = objects.len(),
            "Prepared calendar objects"
        );
        Ok(objects)
    }

    /// One object by URI
    ///
    /// `None` when the URI does not belong to this collection, the record
    /// does not exist, or it could not be prepared.
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    pub async fn calendar_object(
        &self,
        ctx: &RequestContext,
        uri: &str,
    ) -> Result<Option<CalendarObject>, ApplicationError> {
        let Some(identifier) = self.backend.decode_uri(uri) else {
            debug!("URI does not match collection extension");
            return Ok(None);
        };

        let Some(record) = self
            .backend
            .object_by_identifier(ctx, None, &identifier)
            .await?
        else {
            debug!(identifier, "No record for identifier");
            return Ok(None);
        };

        Ok(self.backend.prepare_data(ctx, &record).await.into_object())
    }
}

//! Calendar backend capability
//!
//! A protocol engine serves each calendar collection through one
//! [`CalendarBackend`]. The engine owns the wire format; a backend only
//! enumerates objects, resolves identifiers and turns objects into
//! [`CalendarObject`] descriptors.

mod birthdays;
mod descriptor;
mod labels;
mod object;

use async_trait::async_trait;

pub use birthdays::BirthdayCalendarBackend;
pub use descriptor::{
    CollectionDescriptor, ComponentType, DescriptorValue, ScheduleTransparency, base_descriptor,
    property,
};
pub use labels::{CollectionLabels, LabelCatalog};
pub use object::{CalendarObject, PreparedObject, SkipReason, etag_for};

use crate::{error::ApplicationError, request_context::RequestContext};

/// Operations a calendar collection exposes to the protocol engine
///
/// `Object` is the record type the collection enumerates. `prepare_data` only
/// ever receives values of that type, so a backend never has to check what
/// kind of item it was handed.
#[async_trait]
pub trait CalendarBackend: Send + Sync {
    /// Record type enumerated by this collection
    type Object: Send + Sync;

    /// Fixed URI segment of the collection
    fn collection_uri(&self) -> &'static str;

    /// File extension of the collection's objects
    fn object_extension(&self) -> &'static str;

    /// Collection metadata, merged over [`base_descriptor`]
    async fn descriptor(
        &self,
        ctx: &RequestContext,
    ) -> Result<CollectionDescriptor, ApplicationError>;

    /// Turn one record into a calendar object, or explain why it was skipped
    async fn prepare_data(&self, ctx: &RequestContext, object: &Self::Object) -> PreparedObject;

    /// Resolve a record by its public identifier (the decoded object URI)
    async fn object_by_identifier(
        &self,
        ctx: &RequestContext,
        collection_id: Option<&str>,
        identifier: &str,
    ) -> Result<Option<Self::Object>, ApplicationError>;

    /// Enumerate the collection's records
    async fn list_objects(
        &self,
        ctx: &RequestContext,
        collection_id: Option<&str>,
    ) -> Result<Vec<Self::Object>, ApplicationError>;

    /// Store an object; returns the new etag if one was created
    async fn update_or_create_object(
        &self,
        ctx: &RequestContext,
        collection_id: &str,
        object_uri: &str,
        calendar_data: &str,
    ) -> Result<Option<String>, ApplicationError>;

    /// Remove an object
    async fn delete_object(
        &self,
        ctx: &RequestContext,
        object_uri: &str,
    ) -> Result<(), ApplicationError>;

    /// Object URI for a record identifier: percent-encoded `identifier + extension`
    fn encode_uri(&self, identifier: &str) -> String {
        urlencoding::encode(&format!("{identifier}{}", self.object_extension())).into_owned()
    }

    /// Record identifier for an object URI, `None` if the extension does not match
    fn decode_uri(&self, uri: &str) -> Option<String> {
        let decoded = urlencoding::decode(uri).ok()?;
        decoded
            .strip_suffix(self.object_extension())
            .filter(|identifier| !identifier.is_empty())
            .map(str::to_string)
    }
}

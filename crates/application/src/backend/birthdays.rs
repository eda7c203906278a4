//! Birthday calendar backend
//!
//! Exposes the birthdays of an account's contacts as a read-only calendar
//! collection. Every answer is derived from the contact store and the export
//! service on each call; nothing is cached.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use domain::{BirthdayState, Contact, SpecialDate};
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{
    CalendarBackend, CalendarObject, CollectionDescriptor, ComponentType, DescriptorValue,
    LabelCatalog, PreparedObject, ScheduleTransparency, SkipReason, base_descriptor, property,
};
use crate::{
    error::ApplicationError,
    ports::{CalendarExportPort, ContactFilter, ContactStorePort, IdentityPort, SpecialDateStorePort},
    request_context::RequestContext,
};

const COMPONENT: &str = "BirthdayCalendarBackend";

/// Read-only calendar of contacts' birthdays
pub struct BirthdayCalendarBackend {
    identity: Arc<dyn IdentityPort>,
    contacts: Arc<dyn ContactStorePort>,
    special_dates: Arc<dyn SpecialDateStorePort>,
    exporter: Arc<dyn CalendarExportPort>,
    labels: LabelCatalog,
}

impl fmt::Debug for BirthdayCalendarBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BirthdayCalendarBackend")
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

impl BirthdayCalendarBackend {
    /// Collection URI segment
    pub const COLLECTION_URI: &'static str = "birthdays";
    /// Object file extension
    pub const EXTENSION: &'static str = ".ics";

    /// Create a backend with the built-in English labels
    pub fn new(
        identity: Arc<dyn IdentityPort>,
        contacts: Arc<dyn ContactStorePort>,
        special_dates: Arc<dyn SpecialDateStorePort>,
        exporter: Arc<dyn CalendarExportPort>,
    ) -> Self {
        Self {
            identity,
            contacts,
            special_dates,
            exporter,
            labels: LabelCatalog::default(),
        }
    }

    /// Use a localized label catalog
    #[must_use]
    pub fn with_labels(mut self, labels: LabelCatalog) -> Self {
        self.labels = labels;
        self
    }
}

/// A contact belongs in the calendar when its day and month are known
fn has_birthday(contact: Option<&Contact>) -> bool {
    contact.is_some_and(|c| {
        c.birthdate.is_some()
            && matches!(
                c.birthday_state(),
                BirthdayState::Almost | BirthdayState::Exact
            )
    })
}

#[async_trait]
impl CalendarBackend for BirthdayCalendarBackend {
    type Object = SpecialDate;

    fn collection_uri(&self) -> &'static str {
        Self::COLLECTION_URI
    }

    fn object_extension(&self) -> &'static str {
        Self::EXTENSION
    }

    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id(), account_id = %ctx.account_id()))]
    async fn descriptor(
        &self,
        ctx: &RequestContext,
    ) -> Result<CollectionDescriptor, ApplicationError> {
        let account = self.identity.current_account(ctx).await?;
        let labels = self.labels.resolve(&account.locale);

        let own = CollectionDescriptor::new()
            .with(property::DISPLAY_NAME, labels.display_name.as_str())
            .with(property::READ_ONLY, true)
            .with(
                property::CALENDAR_DESCRIPTION,
                labels.describe(&account.name),
            )
            .with(property::CALENDAR_TIMEZONE, account.timezone.as_str())
            .with(
                property::SUPPORTED_COMPONENT_SET,
                DescriptorValue::ComponentSet(vec![ComponentType::Event]),
            )
            .with(
                property::SCHEDULE_CALENDAR_TRANSP,
                DescriptorValue::Transparency(ScheduleTransparency::Transparent),
            );

        Ok(base_descriptor(self.collection_uri(), &account).merged_with(own))
    }

    #[instrument(skip(self, ctx, object), fields(request_id = %ctx.request_id(), special_date_id = %object.id))]
    async fn prepare_data(&self, ctx: &RequestContext, object: &SpecialDate) -> PreparedObject {
        match self.exporter.export(ctx.account_id(), object.id).await {
            Ok(calendar_data) => PreparedObject::Ready(CalendarObject::new(
                object.id.get(),
                self.encode_uri(&object.uuid.to_string()),
                calendar_data,
                object.last_modified(),
            )),
            Err(e) => {
                debug!(
                    component = COMPONENT,
                    special_date_id = %object.id,
                    error = %e,
                    "{COMPONENT}: {e}"
                );
                PreparedObject::Skipped(SkipReason::ExportFailed(e.to_string()))
            },
        }
    }

    #[instrument(skip(self, ctx, _collection_id), fields(request_id = %ctx.request_id()))]
    async fn object_by_identifier(
        &self,
        ctx: &RequestContext,
        _collection_id: Option<&str>,
        identifier: &str,
    ) -> Result<Option<SpecialDate>, ApplicationError> {
        let Ok(uuid) = Uuid::parse_str(identifier) else {
            debug!(identifier, "Identifier is not a UUID");
            return Ok(None);
        };

        Ok(self
            .special_dates
            .find_by_uuid(ctx.account_id(), uuid)
            .await?)
    }

    #[instrument(skip(self, ctx, _collection_id), fields(request_id = %ctx.request_id(), account_id = %ctx.account_id()))]
    async fn list_objects(
        &self,
        ctx: &RequestContext,
        _collection_id: Option<&str>,
    ) -> Result<Vec<SpecialDate>, ApplicationError> {
        let contacts = self
            .contacts
            .contacts_for_account(ctx.account_id(), ContactFilter::real_and_active())
            .await?;
        let total = contacts.len();

        let dates: Vec<SpecialDate> = contacts
            .into_iter()
            .filter(|contact| has_birthday(Some(contact)))
            .filter_map(|contact| contact.birthdate)
            .collect();

        debug!(contacts = total, birthdays = dates.len(), "Listed birthdays");
        Ok(dates)
    }

    async fn update_or_create_object(
        &self,
        _ctx: &RequestContext,
        _collection_id: &str,
        _object_uri: &str,
        _calendar_data: &str,
    ) -> Result<Option<String>, ApplicationError> {
        Ok(None)
    }

    async fn delete_object(
        &self,
        _ctx: &RequestContext,
        _object_uri: &str,
    ) -> Result<(), ApplicationError> {
        Ok(())
    }
}

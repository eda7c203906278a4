//! Composition of the birthday collection from configured adapters

use std::sync::Arc;

use application::{BirthdayCalendarBackend, CalendarCollectionService};

use crate::{
    adapters::{IcalExportAdapter, InMemoryDirectory},
    config::AppConfig,
};

/// Build the birthday collection over an in-memory directory
pub fn birthday_collection(
    directory: &Arc<InMemoryDirectory>,
    config: &AppConfig,
) -> CalendarCollectionService<BirthdayCalendarBackend> {
    let exporter = IcalExportAdapter::new(
        directory.clone(),
        directory.clone(),
        config.export.clone(),
    );
    let backend = BirthdayCalendarBackend::new(
        directory.clone(),
        directory.clone(),
        directory.clone(),
        Arc::new(exporter),
    )
    .with_labels(config.birthdays.catalog());

    CalendarCollectionService::new(backend)
}

//! Application services - Use case implementations

mod calendar_collection_service;

pub use calendar_collection_service::CalendarCollectionService;

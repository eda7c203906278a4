//! Special date store port

use async_trait::async_trait;
use domain::{AccountId, SpecialDate, SpecialDateId};
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use super::StoreError;

/// Port for looking up date records, always scoped to one account
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpecialDateStorePort: Send + Sync {
    /// Find a record by its public UUID
    async fn find_by_uuid(
        &self,
        account_id: AccountId,
        uuid: Uuid,
    ) -> Result<Option<SpecialDate>, StoreError>;

    /// Find a record by its store id
    async fn find_by_id(
        &self,
        account_id: AccountId,
        id: SpecialDateId,
    ) -> Result<Option<SpecialDate>, StoreError>;
}

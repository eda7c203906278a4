//! In-memory directory - Accounts, contacts and special dates held in process
//!
//! Implements the identity, contact store and special date store ports over
//! `parking_lot` locked maps. Contacts keep their insertion order, which is
//! the order listings return them in.

use std::collections::HashMap;

use application::{
    RequestContext,
    ports::{
        ContactFilter, ContactStorePort, IdentityError, IdentityPort, SpecialDateStorePort,
        StoreError,
    },
};
use async_trait::async_trait;
use domain::{Account, AccountId, Contact, ContactId, SpecialDate, SpecialDateId};
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Process-local account and contact directory
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    accounts: RwLock<HashMap<AccountId, Account>>,
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an account
    pub fn add_account(&self, account: Account) {
        self.accounts.write().insert(account.id, account);
    }

    /// Add a contact, or replace the contact with the same id in place
    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.write();
        match contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(existing) => *existing = contact,
            None => contacts.push(contact),
        }
    }

    /// Remove a contact
    pub fn remove_contact(&self, account_id: AccountId, contact_id: ContactId) -> bool {
        let mut contacts = self.contacts.write();
        let before = contacts.len();
        contacts.retain(|c| !(c.account_id == account_id && c.id == contact_id));
        contacts.len() != before
    }

    /// Number of stored contacts across all accounts
    pub fn contact_count(&self) -> usize {
        self.contacts.read().len()
    }

    fn find_date(
        &self,
        account_id: AccountId,
        predicate: impl Fn(&SpecialDate) -> bool,
    ) -> Option<SpecialDate> {
        self.contacts
            .read()
            .iter()
            .filter(|c| c.account_id == account_id)
            .filter_map(|c| c.birthdate.as_ref())
            .find(|d| d.account_id == account_id && predicate(d))
            .cloned()
    }
}

#[async_trait]
impl IdentityPort for InMemoryDirectory {
    async fn current_account(&self, ctx: &RequestContext) -> Result<Account, IdentityError> {
        self.accounts
            .read()
            .get(&ctx.account_id())
            .cloned()
            .ok_or_else(|| IdentityError::AccountNotFound(ctx.account_id().to_string()))
    }
}

#[async_trait]
impl ContactStorePort for InMemoryDirectory {
    async fn contacts_for_account(
        &self,
        account_id: AccountId,
        filter: ContactFilter,
    ) -> Result<Vec<Contact>, StoreError> {
        let contacts: Vec<Contact> = self
            .contacts
            .read()
            .iter()
            .filter(|c| c.account_id == account_id && filter.matches(c))
            .cloned()
            .collect();
        debug!(%account_id, count = contacts.len(), "Listed contacts");
        Ok(contacts)
    }

    async fn find_contact(
        &self,
        account_id: AccountId,
        contact_id: ContactId,
    ) -> Result<Option<Contact>, StoreError> {
        Ok(self
            .contacts
            .read()
            .iter()
            .find(|c| c.account_id == account_id && c.id == contact_id)
            .cloned())
    }
}

#[async_trait]
impl SpecialDateStorePort for InMemoryDirectory {
    async fn find_by_uuid(
        &self,
        account_id: AccountId,
        uuid: Uuid,
    ) -> Result<Option<SpecialDate>, StoreError> {
        Ok(self.find_date(account_id, |d| d.uuid == uuid))
    }

    async fn find_by_id(
        &self,
        account_id: AccountId,
        id: SpecialDateId,
    ) -> Result<Option<SpecialDate>, StoreError> {
        Ok(self.find_date(account_id, |d| d.id == id))
    }
}

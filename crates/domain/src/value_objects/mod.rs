//! Value Objects - Immutable, identity-less domain primitives

mod account_id;
mod contact_id;
mod email_address;
mod special_date_id;
mod timezone;

pub use account_id::AccountId;
pub use contact_id::ContactId;
pub use email_address::EmailAddress;
pub use special_date_id::SpecialDateId;
pub use timezone::Timezone;

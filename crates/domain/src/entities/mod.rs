//! Domain entities - Objects with identity and lifecycle

mod account;
mod contact;
mod special_date;

pub use account::Account;
pub use contact::{BirthdayState, Contact};
pub use special_date::SpecialDate;

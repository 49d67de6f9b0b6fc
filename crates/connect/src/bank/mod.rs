//! Bank account linking and transaction import.

pub mod mapping;
mod models;
mod service;
mod traits;

pub use models::{BankTransaction, LinkToken, LinkTokenRequest, PersonalFinanceCategory};
pub use service::BankSyncService;
pub use traits::{BankDataProvider, BankSyncServiceTrait};

//! Bank connection for the budget server.
//!
//! Links a bank item through the Plaid link flow and imports its transactions
//! as classified expenses.

pub mod bank;
pub mod client;

pub use bank::{
    BankDataProvider, BankSyncService, BankSyncServiceTrait, BankTransaction, LinkToken,
    LinkTokenRequest, PersonalFinanceCategory,
};
pub use client::{PlaidApiClient, PlaidEnvironment};

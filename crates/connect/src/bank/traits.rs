//! Traits defining the contract for bank data operations.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::models::{BankTransaction, LinkToken, LinkTokenRequest};
use budget_core::errors::Result;

/// Trait for talking to the bank data aggregator
#[async_trait]
pub trait BankDataProvider: Send + Sync {
    /// Create a short-lived token used by the browser link flow.
    async fn create_link_token(&self, request: LinkTokenRequest) -> Result<LinkToken>;

    /// Exchange the public token returned by the link flow for an access token.
    async fn exchange_public_token(&self, public_token: &str) -> Result<String>;

    /// Fetch transactions dated within `[start, end]` for a linked item.
    async fn get_transactions(
        &self,
        access_token: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<BankTransaction>>;
}

/// Trait for the bank sync service operations
#[async_trait]
pub trait BankSyncServiceTrait: Send + Sync {
    /// Create a link token for the configured user.
    async fn link_token(&self) -> Result<LinkToken>;

    /// Exchange a public token and remember the resulting access token.
    async fn link_item(&self, public_token: &str) -> Result<()>;

    /// Import this month's transactions as expenses; returns how many were stored.
    async fn refresh_expenses(&self) -> Result<usize>;

    /// Import transactions from the first of `today`'s month through `today`.
    async fn refresh_expenses_for(&self, today: NaiveDate) -> Result<usize>;
}

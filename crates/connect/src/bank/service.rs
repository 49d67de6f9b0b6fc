//! Service for importing bank transactions into the expense ledger.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::sync::{Arc, RwLock};

use super::mapping;
use super::models::{LinkToken, LinkTokenRequest};
use super::traits::{BankDataProvider, BankSyncServiceTrait};
use budget_core::errors::{Error, Result, ValidationError};
use budget_core::expenses::ExpenseServiceTrait;
use budget_core::utils::time_utils::{first_of_month, local_today};

/// Service for linking a bank item and syncing its transactions
pub struct BankSyncService {
    provider: Arc<dyn BankDataProvider>,
    expense_service: Arc<dyn ExpenseServiceTrait>,
    client_name: String,
    client_user_id: String,
    redirect_uri: Option<String>,
    access_token: RwLock<Option<String>>,
}

impl BankSyncService {
    pub fn new(
        provider: Arc<dyn BankDataProvider>,
        expense_service: Arc<dyn ExpenseServiceTrait>,
        client_name: impl Into<String>,
        client_user_id: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            expense_service,
            client_name: client_name.into(),
            client_user_id: client_user_id.into(),
            redirect_uri: None,
            access_token: RwLock::new(None),
        }
    }

    /// URI the aggregator sends the browser back to after an OAuth bank login.
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Seed the access token of a previously linked item.
    pub fn with_access_token(self, access_token: Option<String>) -> Self {
        let token = access_token.filter(|t| !t.trim().is_empty());
        if token.is_some() {
            debug!("Bank sync service starting with a linked item");
        }
        Self {
            access_token: RwLock::new(token),
            ..self
        }
    }

    fn current_access_token(&self) -> Result<String> {
        let guard = self
            .access_token
            .read()
            .map_err(|_| Error::Unexpected("Access token lock poisoned".to_string()))?;
        guard.clone().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(
                "No bank account is linked; complete the link flow first".to_string(),
            ))
        })
    }
}

#[async_trait]
impl BankSyncServiceTrait for BankSyncService {
    async fn link_token(&self) -> Result<LinkToken> {
        let request = LinkTokenRequest {
            client_name: self.client_name.clone(),
            client_user_id: self.client_user_id.clone(),
            redirect_uri: self.redirect_uri.clone(),
        };
        let token = self.provider.create_link_token(request).await?;
        info!("Created bank link token");
        Ok(token)
    }

    async fn link_item(&self, public_token: &str) -> Result<()> {
        if public_token.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "public_token is required".to_string(),
            )));
        }

        let access_token = self.provider.exchange_public_token(public_token).await?;
        let mut guard = self
            .access_token
            .write()
            .map_err(|_| Error::Unexpected("Access token lock poisoned".to_string()))?;
        if guard.is_some() {
            warn!("Replacing the access token of a previously linked bank item");
        }
        *guard = Some(access_token);
        info!("Bank item linked");
        Ok(())
    }

    async fn refresh_expenses(&self) -> Result<usize> {
        self.refresh_expenses_for(local_today()).await
    }

    async fn refresh_expenses_for(&self, today: NaiveDate) -> Result<usize> {
        let access_token = self.current_access_token()?;
        let start = first_of_month(today);

        let transactions = self
            .provider
            .get_transactions(&access_token, start, today)
            .await?;
        debug!(
            "Fetched {} bank transactions for {} to {}",
            transactions.len(),
            start,
            today
        );

        let expenses = mapping::to_expenses(&transactions)?;
        let inserted = self.expense_service.add_expenses(expenses).await?;
        info!("Imported {} expenses from the bank", inserted);
        Ok(inserted)
    }
}

//! Data models for bank aggregator integration.

use serde::{Deserialize, Serialize};

/// Personal finance category attached to a transaction by the aggregator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersonalFinanceCategory {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub detailed: Option<String>,
}

/// A posted or pending transaction as reported by the aggregator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BankTransaction {
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub merchant_name: Option<String>,
    /// Positive values are money leaving the account.
    pub amount: f64,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Legacy category hierarchy, most general first.
    #[serde(default)]
    pub category: Option<Vec<String>>,
    #[serde(default)]
    pub personal_finance_category: Option<PersonalFinanceCategory>,
    #[serde(default)]
    pub pending: bool,
}

/// Parameters for creating a link token.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkTokenRequest {
    pub client_name: String,
    pub client_user_id: String,
    pub redirect_uri: Option<String>,
}

/// Result of a link token request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkToken {
    pub link_token: String,
    #[serde(default)]
    pub expiration: Option<String>,
}

//! HTTP client for the Plaid bank data API.
//!
//! Only the three endpoints the budget server needs are wrapped: link token
//! creation, public token exchange and transaction retrieval.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::bank::{BankDataProvider, BankTransaction, LinkToken, LinkTokenRequest};
use budget_core::constants::BANK_TRANSACTIONS_PAGE_SIZE;
use budget_core::errors::{Error, Result, ValidationError};
use budget_core::utils::time_utils::format_date;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CLIENT_ID_HEADER: &str = "plaid-client-id";
const SECRET_HEADER: &str = "plaid-secret";

/// Plaid deployment the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaidEnvironment {
    #[default]
    Sandbox,
    Development,
    Production,
}

impl PlaidEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaidEnvironment::Sandbox => "sandbox",
            PlaidEnvironment::Development => "development",
            PlaidEnvironment::Production => "production",
        }
    }

    pub fn base_url(&self) -> String {
        format!("https://{}.plaid.com", self.as_str())
    }
}

impl fmt::Display for PlaidEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaidEnvironment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(PlaidEnvironment::Sandbox),
            "development" => Ok(PlaidEnvironment::Development),
            "production" => Ok(PlaidEnvironment::Production),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown Plaid environment '{}'",
                other
            )))),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request / Response Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct LinkTokenCreateBody<'a> {
    client_name: &'a str,
    language: &'static str,
    country_codes: [&'static str; 1],
    user: LinkUser<'a>,
    products: [&'static str; 2],
    account_filters: AccountFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_uri: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct LinkUser<'a> {
    client_user_id: &'a str,
}

#[derive(Debug, Serialize)]
struct AccountFilters {
    depository: DepositoryFilter,
}

#[derive(Debug, Serialize)]
struct DepositoryFilter {
    account_subtypes: [&'static str; 2],
}

#[derive(Debug, Serialize)]
struct PublicTokenExchangeBody<'a> {
    public_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct PublicTokenExchangeResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct TransactionsGetBody<'a> {
    access_token: &'a str,
    start_date: String,
    end_date: String,
    options: TransactionsGetOptions,
}

#[derive(Debug, Serialize)]
struct TransactionsGetOptions {
    count: i32,
    offset: i32,
    include_personal_finance_category: bool,
}

#[derive(Debug, Deserialize)]
struct TransactionsGetResponse {
    #[serde(default)]
    transactions: Vec<BankTransaction>,
    #[serde(default)]
    total_transactions: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct PlaidErrorResponse {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    display_message: Option<String>,
}

fn link_token_body(request: &LinkTokenRequest) -> LinkTokenCreateBody<'_> {
    LinkTokenCreateBody {
        client_name: &request.client_name,
        language: "en",
        country_codes: ["US"],
        user: LinkUser {
            client_user_id: &request.client_user_id,
        },
        products: ["auth", "transactions"],
        account_filters: AccountFilters {
            depository: DepositoryFilter {
                account_subtypes: ["checking", "savings"],
            },
        },
        redirect_uri: request.redirect_uri.as_deref(),
    }
}

fn transactions_body(access_token: &str, start: NaiveDate, end: NaiveDate) -> TransactionsGetBody<'_> {
    TransactionsGetBody {
        access_token,
        start_date: format_date(start),
        end_date: format_date(end),
        options: TransactionsGetOptions {
            count: BANK_TRANSACTIONS_PAGE_SIZE,
            offset: 0,
            include_personal_finance_category: true,
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plaid API Client
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the Plaid API.
///
/// ```ignore
/// let client = PlaidApiClient::new(PlaidEnvironment::Sandbox, "client-id", "secret")?;
/// let token = client.create_link_token(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PlaidApiClient {
    client: reqwest::Client,
    base_url: String,
    client_id: HeaderValue,
    secret: HeaderValue,
}

impl PlaidApiClient {
    /// Create a client for one of the hosted Plaid environments.
    pub fn new(environment: PlaidEnvironment, client_id: &str, secret: &str) -> Result<Self> {
        Self::with_base_url(&environment.base_url(), client_id, secret)
    }

    /// Create a client against an explicit base URL.
    pub fn with_base_url(base_url: &str, client_id: &str, secret: &str) -> Result<Self> {
        let client_id = HeaderValue::from_str(client_id)
            .map_err(|e| Error::Unexpected(format!("Invalid Plaid client id: {}", e)))?;
        let mut secret = HeaderValue::from_str(secret)
            .map_err(|e| Error::Unexpected(format!("Invalid Plaid secret: {}", e)))?;
        secret.set_sensitive(true);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id,
            secret,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(CLIENT_ID_HEADER, self.client_id.clone());
        headers.insert(SECRET_HEADER, self.secret.clone());
        headers
    }

    /// Make a POST request with a JSON body and parse the response.
    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Plaid] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Request to {} failed: {}", path, e)))?;

        parse_response(response).await
    }
}

/// Parse an HTTP response, turning Plaid error bodies into upstream errors.
async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Upstream(format!("Failed to read response: {}", e)))?;

    if !status.is_success() {
        return Err(error_from_body(status, &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| Error::Upstream(format!("Failed to parse response: {}", e)))
}

fn error_from_body(status: reqwest::StatusCode, body: &str) -> Error {
    if let Ok(err) = serde_json::from_str::<PlaidErrorResponse>(body) {
        let message = err
            .error_message
            .or(err.display_message)
            .unwrap_or_else(|| format!("HTTP {}", status));
        return match err.error_code {
            Some(code) => Error::Upstream(format!("{} ({})", message, code)),
            None => Error::Upstream(message),
        };
    }
    Error::Upstream(format!(
        "HTTP {}: {}",
        status,
        body.chars().take(200).collect::<String>()
    ))
}

#[async_trait]
impl BankDataProvider for PlaidApiClient {
    async fn create_link_token(&self, request: LinkTokenRequest) -> Result<LinkToken> {
        self.post("/link/token/create", &link_token_body(&request))
            .await
    }

    async fn exchange_public_token(&self, public_token: &str) -> Result<String> {
        let response: PublicTokenExchangeResponse = self
            .post(
                "/item/public_token/exchange",
                &PublicTokenExchangeBody { public_token },
            )
            .await?;
        Ok(response.access_token)
    }

    async fn get_transactions(
        &self,
        access_token: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<BankTransaction>> {
        let response: TransactionsGetResponse = self
            .post(
                "/transactions/get",
                &transactions_body(access_token, start, end),
            )
            .await?;

        if let Some(total) = response.total_transactions {
            if total > response.transactions.len() as i64 {
                debug!(
                    "[Plaid] {} of {} transactions returned in the first page",
                    response.transactions.len(),
                    total
                );
            }
        }
        Ok(response.transactions)
    }
}

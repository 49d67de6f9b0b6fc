use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    api::shared::{script_string, success, StatusResponse},
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

const LINK_SCRIPT_URL: &str = "https://cdn.plaid.com/link/v2/stable/link-initialize.js";

/// Fields the link flow sends back, either as query parameters or a form body.
#[derive(Debug, Default, Deserialize)]
struct LinkResult {
    #[serde(default)]
    public_token: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

impl LinkResult {
    fn into_public_token(self) -> ApiResult<String> {
        if let Some(message) = self.error_message.filter(|m| !m.is_empty()) {
            return Err(ApiError::ExpectationFailed(format!(
                "Error fetching public token from link: {}",
                message
            )));
        }
        Ok(self.public_token.unwrap_or_default())
    }
}

fn link_page(link_token: &str, app_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Link your bank account</title>
  <script src="{script}"></script>
</head>
<body>
  <button id="link-button">Link account</button>
  <p id="link-status"></p>
  <script>
    const appUrl = {app_url};
    const status = document.getElementById("link-status");
    const handler = Plaid.create({{
      token: {link_token},
      onSuccess: async (publicToken) => {{
        const body = new URLSearchParams({{ public_token: publicToken }});
        const res = await fetch(appUrl + "/create_plaid_item", {{ method: "POST", body }});
        status.textContent = res.ok ? "Account linked." : "Linking failed.";
      }},
      onExit: (err) => {{
        if (err) status.textContent = err.display_message || err.error_message || "Link closed.";
      }},
    }});
    document.getElementById("link-button").onclick = () => handler.open();
  </script>
</body>
</html>"#,
        script = LINK_SCRIPT_URL,
        app_url = script_string(app_url),
        link_token = script_string(link_token),
    )
}

fn oauth_after_page(public_token: &str, app_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Finishing bank link</title>
</head>
<body>
  <p id="link-status">Finishing bank link...</p>
  <script>
    const body = new URLSearchParams({{ public_token: {public_token} }});
    fetch({app_url} + "/create_plaid_item", {{ method: "POST", body }}).then((res) => {{
      document.getElementById("link-status").textContent =
        res.ok ? "Account linked." : "Linking failed.";
    }});
  </script>
</body>
</html>"#,
        public_token = script_string(public_token),
        app_url = script_string(app_url),
    )
}

/// Page that opens the bank link flow with a fresh link token.
async fn link_user_account(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let token = state.bank_sync_service.link_token().await?;
    Ok(Html(link_page(&token.link_token, &state.app_url)))
}

/// OAuth redirect target; relays the public token to `/create_plaid_item`.
async fn oauth_after(
    State(state): State<Arc<AppState>>,
    Query(result): Query<LinkResult>,
) -> ApiResult<Html<String>> {
    let public_token = result.into_public_token()?;
    Ok(Html(oauth_after_page(&public_token, &state.app_url)))
}

async fn create_plaid_item(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<StatusResponse>> {
    let result: LinkResult = serde_urlencoded::from_bytes(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid form body: {}", e)))?;
    let public_token = result.into_public_token()?;
    state.bank_sync_service.link_item(&public_token).await?;
    Ok(success())
}

async fn refresh_expenses_via_plaid(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StatusResponse>> {
    let imported = state.bank_sync_service.refresh_expenses().await?;
    tracing::info!("Bank refresh stored {} expenses", imported);
    Ok(success())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/link_user_account", get(link_user_account))
        .route("/oauth_after", get(oauth_after))
        .route("/create_plaid_item", post(create_plaid_item))
        .route(
            "/refresh_expenses_via_plaid",
            post(refresh_expenses_via_plaid),
        )
}

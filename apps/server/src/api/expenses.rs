use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use budget_core::expenses::{DateRange, Expense};

use crate::{
    api::shared::{decode_json, decode_optional_json, success, StatusResponse},
    error::ApiResult,
    main_lib::AppState,
};

/// Expenses within the requested range, defaulting to the current month.
async fn get_expenses(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<Vec<Expense>>> {
    let range: DateRange = decode_optional_json(&body)?;
    let expenses = state.expense_service.get_expenses_in_range(&range)?;
    Ok(Json(expenses))
}

async fn post_expense(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<StatusResponse>> {
    let expenses: Vec<Expense> = decode_json(&body)?;
    let inserted = state.expense_service.add_expenses(expenses).await?;
    tracing::debug!("Stored {} expenses", inserted);
    Ok(success())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/get_summary", get(get_expenses))
        .route("/get_expenses", get(get_expenses))
        .route("/post_expense", post(post_expense))
}

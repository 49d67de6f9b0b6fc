use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use budget_core::insights::MonthlyBudgetInsights;

use crate::{error::ApiResult, main_lib::AppState};

async fn get_compare(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MonthlyBudgetInsights>> {
    let insights = state.insights_service.get_monthly_budget_insights()?;
    Ok(Json(insights))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/get_compare", get(get_compare))
}

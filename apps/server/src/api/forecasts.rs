use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use budget_core::forecasts::Forecast;

use crate::{
    api::shared::{decode_json, success, StatusResponse},
    error::ApiResult,
    main_lib::AppState,
};

/// Store forecast rows under the current month.
async fn post_forecast(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<StatusResponse>> {
    let forecast: Vec<Forecast> = decode_json(&body)?;
    state.forecast_service.add_forecast(forecast).await?;
    Ok(success())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/post_forecast", post(post_forecast))
}

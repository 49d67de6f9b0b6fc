use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::{
    api::shared::{success, StatusResponse},
    main_lib::AppState,
};

async fn main_status() -> Json<StatusResponse> {
    success()
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/main", get(main_status))
}

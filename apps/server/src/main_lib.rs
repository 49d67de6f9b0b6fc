use std::sync::Arc;

use crate::config::Config;
use budget_connect::{BankSyncService, BankSyncServiceTrait, PlaidApiClient};
use budget_core::{
    expenses::{ExpenseService, ExpenseServiceTrait},
    forecasts::{ForecastService, ForecastServiceTrait},
    insights::{InsightsService, InsightsServiceTrait},
};
use budget_storage_sqlite::{
    db::{self, write_actor},
    expenses::ExpenseRepository,
    forecasts::ForecastRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub forecast_service: Arc<dyn ForecastServiceTrait>,
    pub insights_service: Arc<dyn InsightsServiceTrait>,
    pub bank_sync_service: Arc<dyn BankSyncServiceTrait>,
    pub app_url: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("BUDGET_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let forecast_repository = Arc::new(ForecastRepository::new(pool.clone(), writer.clone()));

    let expense_service: Arc<dyn ExpenseServiceTrait> =
        Arc::new(ExpenseService::new(expense_repository.clone()));
    let forecast_service: Arc<dyn ForecastServiceTrait> =
        Arc::new(ForecastService::new(forecast_repository.clone()));
    let insights_service: Arc<dyn InsightsServiceTrait> = Arc::new(InsightsService::new(
        expense_repository,
        forecast_repository,
    ));

    let plaid_client = PlaidApiClient::new(
        config.plaid.environment,
        &config.plaid.client_id,
        &config.plaid.secret,
    )?;
    if config.plaid.client_id.is_empty() || config.plaid.secret.is_empty() {
        tracing::warn!("PLAID_CLIENT_ID or PLAID_SECRET is not set; bank linking will fail");
    }
    tracing::info!(
        "Using Plaid {} environment at {}",
        config.plaid.environment,
        plaid_client.base_url()
    );
    let bank_sync_service: Arc<dyn BankSyncServiceTrait> = Arc::new(
        BankSyncService::new(
            Arc::new(plaid_client),
            expense_service.clone(),
            config.plaid.client_name.clone(),
            config.plaid.client_id.clone(),
        )
        .with_redirect_uri(format!("{}/oauth_after", config.app_url))
        .with_access_token(config.plaid.access_token.clone()),
    );

    Ok(Arc::new(AppState {
        expense_service,
        forecast_service,
        insights_service,
        bank_sync_service,
        app_url: config.app_url.clone(),
    }))
}

use crate::errors::Result;
use crate::forecasts::forecasts_model::Forecast;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for forecast repository operations
#[async_trait]
pub trait ForecastRepositoryTrait: Send + Sync {
    /// Forecast rows stored for exactly `period` (first day of the month).
    fn fetch_forecast(&self, period: NaiveDate) -> Result<Vec<Forecast>>;
    /// Inserts all rows tagged with `period` in one transaction.
    async fn insert_forecast(&self, forecast: Vec<Forecast>, period: NaiveDate) -> Result<usize>;
}

/// Trait for forecast service operations
#[async_trait]
pub trait ForecastServiceTrait: Send + Sync {
    fn get_forecast(&self, period: NaiveDate) -> Result<Vec<Forecast>>;
    fn get_current_forecast(&self) -> Result<Vec<Forecast>>;
    async fn add_forecast(&self, forecast: Vec<Forecast>) -> Result<usize>;
    async fn add_forecast_for_period(
        &self,
        forecast: Vec<Forecast>,
        period: NaiveDate,
    ) -> Result<usize>;
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::forecasts_model::Forecast;
use super::forecasts_traits::{ForecastRepositoryTrait, ForecastServiceTrait};
use crate::errors::Result;
use crate::utils::time_utils::{first_of_month, local_today};

pub struct ForecastService {
    repository: Arc<dyn ForecastRepositoryTrait>,
}

impl ForecastService {
    pub fn new(repository: Arc<dyn ForecastRepositoryTrait>) -> Self {
        ForecastService { repository }
    }
}

#[async_trait]
impl ForecastServiceTrait for ForecastService {
    fn get_forecast(&self, period: NaiveDate) -> Result<Vec<Forecast>> {
        self.repository.fetch_forecast(first_of_month(period))
    }

    fn get_current_forecast(&self) -> Result<Vec<Forecast>> {
        self.get_forecast(local_today())
    }

    /// Stores the forecast under the current month.
    async fn add_forecast(&self, forecast: Vec<Forecast>) -> Result<usize> {
        self.add_forecast_for_period(forecast, local_today()).await
    }

    async fn add_forecast_for_period(
        &self,
        forecast: Vec<Forecast>,
        period: NaiveDate,
    ) -> Result<usize> {
        if forecast.is_empty() {
            return Ok(0);
        }
        self.repository
            .insert_forecast(forecast, first_of_month(period))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;
    use std::sync::RwLock;

    #[derive(Default)]
    struct MockForecastRepository {
        rows: RwLock<Vec<(NaiveDate, Forecast)>>,
    }

    #[async_trait]
    impl ForecastRepositoryTrait for MockForecastRepository {
        fn fetch_forecast(&self, period: NaiveDate) -> Result<Vec<Forecast>> {
            Ok(self
                .rows
                .read()
                .unwrap()
                .iter()
                .filter(|(p, _)| *p == period)
                .map(|(_, f)| f.clone())
                .collect())
        }

        async fn insert_forecast(
            &self,
            forecast: Vec<Forecast>,
            period: NaiveDate,
        ) -> Result<usize> {
            let count = forecast.len();
            self.rows
                .write()
                .unwrap()
                .extend(forecast.into_iter().map(|f| (period, f)));
            Ok(count)
        }
    }

    #[tokio::test]
    async fn test_forecast_is_keyed_by_first_of_month() {
        let repo = Arc::new(MockForecastRepository::default());
        let service = ForecastService::new(repo.clone());
        let mid_march = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();

        service
            .add_forecast_for_period(
                vec![Forecast {
                    category: Category::Bill,
                    amount: 100.0,
                }],
                mid_march,
            )
            .await
            .unwrap();

        let stored = repo.rows.read().unwrap().clone();
        assert_eq!(stored[0].0, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let any_day_in_march = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(service.get_forecast(any_day_in_march).unwrap().len(), 1);
        let april = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert!(service.get_forecast(april).unwrap().is_empty());
    }
}

use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use super::insights_model::MonthlyBudgetInsights;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::forecasts::ForecastRepositoryTrait;
use crate::utils::time_utils::{local_today, month_bounds};

/// Trait for monthly insight operations
pub trait InsightsServiceTrait: Send + Sync {
    /// Insights for the month containing today's date on the local clock.
    fn get_monthly_budget_insights(&self) -> Result<MonthlyBudgetInsights>;
    fn get_monthly_budget_insights_for(&self, today: NaiveDate) -> Result<MonthlyBudgetInsights>;
}

pub struct InsightsService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    forecast_repository: Arc<dyn ForecastRepositoryTrait>,
}

impl InsightsService {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        forecast_repository: Arc<dyn ForecastRepositoryTrait>,
    ) -> Self {
        InsightsService {
            expense_repository,
            forecast_repository,
        }
    }
}

impl InsightsServiceTrait for InsightsService {
    fn get_monthly_budget_insights(&self) -> Result<MonthlyBudgetInsights> {
        self.get_monthly_budget_insights_for(local_today())
    }

    fn get_monthly_budget_insights_for(&self, today: NaiveDate) -> Result<MonthlyBudgetInsights> {
        let (first_of_month, last_of_month) = month_bounds(today);
        debug!(
            "Building budget insights for {} through {}",
            first_of_month, last_of_month
        );

        let expenses = self
            .expense_repository
            .fetch_expenses(first_of_month, last_of_month)?;
        let forecast = self.forecast_repository.fetch_forecast(first_of_month)?;

        Ok(MonthlyBudgetInsights { expenses, forecast })
    }
}

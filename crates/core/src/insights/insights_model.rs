use serde::{Deserialize, Serialize};

use crate::expenses::Expense;
use crate::forecasts::Forecast;

/// Actual spending and forecast for one period. Derived on every request, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlyBudgetInsights {
    pub expenses: Vec<Expense>,
    pub forecast: Vec<Forecast>,
}

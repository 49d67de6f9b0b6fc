//! Insights module - monthly actual-versus-forecast aggregation.

mod insights_model;
mod insights_service;

pub use insights_model::MonthlyBudgetInsights;
pub use insights_service::{InsightsService, InsightsServiceTrait};

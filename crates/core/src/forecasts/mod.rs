//! Forecasts module - domain models, services, and traits.

mod forecasts_model;
mod forecasts_service;
mod forecasts_traits;

pub use forecasts_model::Forecast;
pub use forecasts_service::ForecastService;
pub use forecasts_traits::{ForecastRepositoryTrait, ForecastServiceTrait};

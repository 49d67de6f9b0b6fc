//! SQLite storage implementation for forecasts.

mod model;
mod repository;

pub use model::{ForecastDB, NewForecastDB};
pub use repository::ForecastRepository;

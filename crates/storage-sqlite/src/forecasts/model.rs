//! Database models for forecasts.

use budget_core::categories::Category;
use budget_core::errors::{DatabaseError, Error, Result};
use budget_core::forecasts::Forecast;
use diesel::prelude::*;

/// Database model for forecast rows
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::forecast)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ForecastDB {
    pub id: i32,
    pub category_id: String,
    pub amount: f64,
    pub period: String,
}

/// Database model for inserting a forecast row
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::forecast)]
pub struct NewForecastDB {
    pub category_id: String,
    pub amount: f64,
    pub period: String,
}

impl NewForecastDB {
    pub fn new(domain: Forecast, period: String) -> Self {
        Self {
            category_id: domain.category.as_str().to_string(),
            amount: domain.amount,
            period,
        }
    }
}

impl TryFrom<ForecastDB> for Forecast {
    type Error = Error;

    fn try_from(db: ForecastDB) -> Result<Self> {
        let category = db.category_id.parse::<Category>().map_err(|e| {
            Error::Database(DatabaseError::Decode(format!("forecast {}: {}", db.id, e)))
        })?;
        Ok(Forecast {
            category,
            amount: db.amount,
        })
    }
}

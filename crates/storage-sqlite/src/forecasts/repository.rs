use budget_core::forecasts::{Forecast, ForecastRepositoryTrait};
use budget_core::utils::time_utils::format_date;
use budget_core::Result;

use super::model::{ForecastDB, NewForecastDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::forecast;
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct ForecastRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ForecastRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ForecastRepository { pool, writer }
    }
}

#[async_trait]
impl ForecastRepositoryTrait for ForecastRepository {
    fn fetch_forecast(&self, period: NaiveDate) -> Result<Vec<Forecast>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = forecast::table
            .filter(forecast::period.eq(format_date(period)))
            .order(forecast::id.asc())
            .select(ForecastDB::as_select())
            .load::<ForecastDB>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter().map(Forecast::try_from).collect()
    }

    async fn insert_forecast(&self, rows: Vec<Forecast>, period: NaiveDate) -> Result<usize> {
        let period_key = format_date(period);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut affected_rows = 0;
                for row in rows {
                    let row_db = NewForecastDB::new(row, period_key.clone());
                    affected_rows += diesel::insert_into(forecast::table)
                        .values(&row_db)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(affected_rows)
            })
            .await
    }
}

use budget_core::expenses::{Expense, ExpenseRepositoryTrait};
use budget_core::utils::time_utils::format_date;
use budget_core::Result;

use super::model::{ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expenses;
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use std::sync::Arc;

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn fetch_expenses(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        // Dates are stored as zero-padded ISO strings, so text order is date order.
        let rows = expenses::table
            .filter(expenses::date.ge(format_date(start)))
            .filter(expenses::date.le(format_date(end)))
            .order((expenses::date.asc(), expenses::id.asc()))
            .select(ExpenseDB::as_select())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter().map(Expense::try_from).collect()
    }

    async fn insert_expenses(&self, new_expenses: Vec<Expense>) -> Result<usize> {
        debug!("Inserting {} expenses", new_expenses.len());
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut affected_rows = 0;
                for expense in new_expenses {
                    let row: NewExpenseDB = expense.into();
                    affected_rows += diesel::insert_into(expenses::table)
                        .values(&row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(affected_rows)
            })
            .await
    }
}

//! Database models for expenses.

use budget_core::categories::Category;
use budget_core::errors::{DatabaseError, Error, Result};
use budget_core::expenses::Expense;
use budget_core::utils::time_utils::{format_date, parse_date};
use diesel::prelude::*;

/// Database model for expenses
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: i32,
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub category_id: String,
}

/// Database model for inserting an expense
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpenseDB {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub category_id: String,
}

impl TryFrom<ExpenseDB> for Expense {
    type Error = Error;

    fn try_from(db: ExpenseDB) -> Result<Self> {
        let date = parse_date(&db.date).map_err(|e| {
            Error::Database(DatabaseError::Decode(format!(
                "expense {} has date '{}': {}",
                db.id, db.date, e
            )))
        })?;
        let category = db.category_id.parse::<Category>().map_err(|e| {
            Error::Database(DatabaseError::Decode(format!("expense {}: {}", db.id, e)))
        })?;
        Ok(Expense {
            date,
            description: db.description,
            amount: db.amount,
            category,
        })
    }
}

impl From<Expense> for NewExpenseDB {
    fn from(domain: Expense) -> Self {
        Self {
            date: format_date(domain.date),
            description: domain.description,
            amount: domain.amount,
            category_id: domain.category.as_str().to_string(),
        }
    }
}

//! Expense domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::categories::Category;

/// A recorded transaction. Expenses are immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    #[serde(with = "crate::utils::serde_date")]
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub category: Category,
}

/// Inclusive date range filter for expense queries.
///
/// Both bounds are optional on the wire; missing or empty values fall back to
/// the current month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
}

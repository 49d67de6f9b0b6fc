use crate::errors::Result;
use crate::expenses::expenses_model::{DateRange, Expense};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for expense repository operations
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Expenses dated within `[start, end]`, both inclusive.
    fn fetch_expenses(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Expense>>;
    /// Inserts all expenses in one transaction and returns the number of rows written.
    async fn insert_expenses(&self, expenses: Vec<Expense>) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses_in_range(&self, range: &DateRange) -> Result<Vec<Expense>>;
    async fn add_expenses(&self, expenses: Vec<Expense>) -> Result<usize>;
}

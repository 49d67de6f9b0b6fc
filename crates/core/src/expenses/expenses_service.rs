use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;

use super::expenses_model::{DateRange, Expense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::utils::serde_date::parse_lenient;
use crate::utils::time_utils::{local_today, month_bounds};

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { repository }
    }

    /// Resolve a possibly partial range against the month containing `today`.
    pub fn resolve_range(range: &DateRange, today: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
        let (first, last) = month_bounds(today);
        let start = match non_empty(&range.from_date) {
            Some(value) => parse_bound("fromDate", value)?,
            None => first,
        };
        let end = match non_empty(&range.to_date) {
            Some(value) => parse_bound("toDate", value)?,
            None => last,
        };
        Ok((start, end))
    }
}

fn parse_bound(field: &str, value: &str) -> Result<NaiveDate> {
    parse_lenient(value).ok_or_else(|| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "{} '{}' is not a YYYY-MM-DD date or RFC 3339 timestamp",
            field, value
        )))
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses_in_range(&self, range: &DateRange) -> Result<Vec<Expense>> {
        let (start, end) = Self::resolve_range(range, local_today())?;
        debug!("Fetching expenses from {} to {}", start, end);
        self.repository.fetch_expenses(start, end)
    }

    async fn add_expenses(&self, expenses: Vec<Expense>) -> Result<usize> {
        if expenses.is_empty() {
            return Ok(0);
        }
        self.repository.insert_expenses(expenses).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;
    use std::sync::RwLock;

    struct MockExpenseRepository {
        rows: RwLock<Vec<Expense>>,
        inserts: RwLock<usize>,
    }

    impl MockExpenseRepository {
        fn new() -> Self {
            Self {
                rows: RwLock::new(Vec::new()),
                inserts: RwLock::new(0),
            }
        }
    }

    #[async_trait]
    impl ExpenseRepositoryTrait for MockExpenseRepository {
        fn fetch_expenses(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Expense>> {
            Ok(self
                .rows
                .read()
                .unwrap()
                .iter()
                .filter(|e| e.date >= start && e.date <= end)
                .cloned()
                .collect())
        }

        async fn insert_expenses(&self, expenses: Vec<Expense>) -> Result<usize> {
            *self.inserts.write().unwrap() += 1;
            let count = expenses.len();
            self.rows.write().unwrap().extend(expenses);
            Ok(count)
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(from: Option<&str>, to: Option<&str>) -> DateRange {
        DateRange {
            from_date: from.map(String::from),
            to_date: to.map(String::from),
        }
    }

    #[test]
    fn test_resolve_range_defaults_to_current_month() {
        let today = ymd(2024, 2, 14);
        let resolved = ExpenseService::resolve_range(&DateRange::default(), today).unwrap();
        assert_eq!(resolved, (ymd(2024, 2, 1), ymd(2024, 2, 29)));
    }

    #[test]
    fn test_resolve_range_fills_only_missing_bounds() {
        let today = ymd(2024, 2, 14);
        let resolved =
            ExpenseService::resolve_range(&range(Some("2024-01-10"), Some("")), today).unwrap();
        assert_eq!(resolved, (ymd(2024, 1, 10), ymd(2024, 2, 29)));
    }

    #[test]
    fn test_resolve_range_rejects_bad_dates() {
        let today = ymd(2024, 2, 14);
        assert!(matches!(
            ExpenseService::resolve_range(&range(Some("10/01/2024"), None), today),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_resolve_range_accepts_timestamps_like_expense_dates() {
        let today = ymd(2024, 2, 14);
        let resolved = ExpenseService::resolve_range(
            &range(Some("2024-01-10T08:30:00Z"), Some("2024-01-20T23:00:00-05:00")),
            today,
        )
        .unwrap();
        assert_eq!(resolved, (ymd(2024, 1, 10), ymd(2024, 1, 20)));
    }

    #[tokio::test]
    async fn test_add_expenses_skips_empty_batches() {
        let repo = Arc::new(MockExpenseRepository::new());
        let service = ExpenseService::new(repo.clone());

        assert_eq!(service.add_expenses(Vec::new()).await.unwrap(), 0);
        assert_eq!(*repo.inserts.read().unwrap(), 0);

        let written = service
            .add_expenses(vec![Expense {
                date: ymd(2024, 3, 2),
                description: "Corner store".to_string(),
                amount: 12.5,
                category: Category::Grocery,
            }])
            .await
            .unwrap();
        assert_eq!(written, 1);
        assert_eq!(
            service
                .get_expenses_in_range(&range(Some("2024-03-01"), Some("2024-03-31")))
                .unwrap()
                .len(),
            1
        );
    }
}

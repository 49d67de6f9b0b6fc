use std::sync::Arc;

use budget_core::categories::Category;
use budget_core::expenses::{Expense, ExpenseRepositoryTrait};
use budget_core::forecasts::{Forecast, ForecastRepositoryTrait};
use budget_storage_sqlite::{
    create_pool, db, expenses::ExpenseRepository, forecasts::ForecastRepository, run_migrations,
    spawn_writer, DbPool, WriteHandle,
};
use chrono::NaiveDate;
use tempfile::{tempdir, TempDir};

struct TestDb {
    // Keeps the directory alive for the duration of the test.
    _dir: TempDir,
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

fn setup() -> TestDb {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("budget.db");
    let db_path = db::init(path.to_str().unwrap()).unwrap();
    let pool = create_pool(&db_path).unwrap();
    run_migrations(&pool).unwrap();
    let writer = spawn_writer((*pool).clone());
    TestDb {
        _dir: dir,
        pool,
        writer,
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expense(date: NaiveDate, description: &str, amount: f64, category: Category) -> Expense {
    Expense {
        date,
        description: description.to_string(),
        amount,
        category,
    }
}

#[tokio::test]
async fn inserted_expenses_come_back_over_a_covering_range() {
    let test_db = setup();
    let repo = ExpenseRepository::new(test_db.pool.clone(), test_db.writer.clone());

    let batch = vec![
        expense(ymd(2024, 3, 1), "Rent", 1500.0, Category::Bill),
        expense(ymd(2024, 3, 15), "Groceries", 84.12, Category::Grocery),
        expense(ymd(2024, 3, 31), "Cinema", 22.0, Category::Ent),
    ];
    assert_eq!(repo.insert_expenses(batch.clone()).await.unwrap(), 3);

    let mut fetched = repo.fetch_expenses(ymd(2024, 3, 1), ymd(2024, 3, 31)).unwrap();
    fetched.sort_by(|a, b| a.description.cmp(&b.description));
    let mut expected = batch;
    expected.sort_by(|a, b| a.description.cmp(&b.description));
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn expense_range_bounds_are_inclusive() {
    let test_db = setup();
    let repo = ExpenseRepository::new(test_db.pool.clone(), test_db.writer.clone());

    repo.insert_expenses(vec![
        expense(ymd(2024, 2, 29), "Before", 1.0, Category::Misc),
        expense(ymd(2024, 3, 1), "First", 2.0, Category::Misc),
        expense(ymd(2024, 3, 31), "Last", 3.0, Category::Misc),
        expense(ymd(2024, 4, 1), "After", 4.0, Category::Misc),
    ])
    .await
    .unwrap();

    let fetched = repo.fetch_expenses(ymd(2024, 3, 1), ymd(2024, 3, 31)).unwrap();
    let names: Vec<&str> = fetched.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(names, vec!["First", "Last"]);

    assert!(repo
        .fetch_expenses(ymd(2024, 3, 31), ymd(2024, 3, 1))
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn failed_batch_insert_leaves_nothing_committed() {
    let test_db = setup();
    let repo = ExpenseRepository::new(test_db.pool.clone(), test_db.writer.clone());

    // SQLite stores NaN as NULL, which the NOT NULL amount column rejects.
    let result = repo
        .insert_expenses(vec![
            expense(ymd(2024, 5, 2), "Valid", 10.0, Category::Takeout),
            expense(ymd(2024, 5, 3), "Broken", f64::NAN, Category::Takeout),
        ])
        .await;
    assert!(result.is_err());

    let fetched = repo.fetch_expenses(ymd(2024, 5, 1), ymd(2024, 5, 31)).unwrap();
    assert!(fetched.is_empty());
}

#[tokio::test]
async fn forecast_is_fetched_by_exact_period() {
    let test_db = setup();
    let repo = ForecastRepository::new(test_db.pool.clone(), test_db.writer.clone());

    let march = ymd(2024, 3, 1);
    let april = ymd(2024, 4, 1);
    repo.insert_forecast(
        vec![
            Forecast {
                category: Category::Bill,
                amount: 100.0,
            },
            Forecast {
                category: Category::Grocery,
                amount: 350.0,
            },
        ],
        march,
    )
    .await
    .unwrap();
    repo.insert_forecast(
        vec![Forecast {
            category: Category::Saving,
            amount: 500.0,
        }],
        april,
    )
    .await
    .unwrap();

    let fetched = repo.fetch_forecast(march).unwrap();
    assert_eq!(fetched.len(), 2);
    assert!(fetched.contains(&Forecast {
        category: Category::Bill,
        amount: 100.0,
    }));
    assert_eq!(repo.fetch_forecast(april).unwrap().len(), 1);
    assert!(repo.fetch_forecast(ymd(2024, 3, 2)).unwrap().is_empty());
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let test_db = setup();
    run_migrations(&test_db.pool).unwrap();
}

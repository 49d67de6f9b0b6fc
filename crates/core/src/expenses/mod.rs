//! Expenses module - domain models, services, and traits.

mod expenses_model;
mod expenses_service;
mod expenses_traits;

pub use expenses_model::{DateRange, Expense};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};

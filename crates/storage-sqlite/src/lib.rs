//! SQLite storage implementation for the budget server.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `budget-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for expenses and forecasts
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies exist.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod expenses;
pub mod forecasts;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from budget-core for convenience
pub use budget_core::errors::{DatabaseError, Error, Result};

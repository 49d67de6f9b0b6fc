//! Budget Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the budget server.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod categories;
pub mod classifier;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod forecasts;
pub mod insights;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

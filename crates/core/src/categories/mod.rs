//! Categories module - the budget category vocabulary.

mod categories_model;

pub use categories_model::Category;

//! Classifier module - maps bank provider category labels to budget categories.

mod category_classifier;

pub use category_classifier::{classify, match_label, CATEGORY_KEYWORDS};

//! Forecast domain models.

use serde::{Deserialize, Serialize};

use crate::categories::Category;

/// Planned spending ceiling for a category within a period.
///
/// The period is not part of the wire shape; it is assigned when the forecast
/// is stored and used as the lookup key when it is read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Forecast {
    pub category: Category,
    pub amount: f64,
}

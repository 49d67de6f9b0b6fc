//! Budget category vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// Fixed set of budget categories an expense or forecast can belong to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Saving,
    Bill,
    Debt,
    /// Entertainment and travel.
    Ent,
    Takeout,
    #[default]
    Misc,
    Grocery,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Saving,
        Category::Bill,
        Category::Debt,
        Category::Ent,
        Category::Takeout,
        Category::Misc,
        Category::Grocery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Saving => "saving",
            Category::Bill => "bill",
            Category::Debt => "debt",
            Category::Ent => "ent",
            Category::Takeout => "takeout",
            Category::Misc => "misc",
            Category::Grocery => "grocery",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Validation(ValidationError::UnknownCategory(s.to_string())))
    }
}

use crate::categories::Category;

/// Ordered `(keyword, category)` pairs matched against upper-cased provider labels.
///
/// The first entry whose keyword is contained in a label wins, so an entry must
/// come before any shorter keyword it contains (`TRANSFER DEPOSIT` before
/// `TRANSFER`, `TRAVEL GAS STATIONS` before `TRAVEL`). Labels that match
/// nothing classify as [`Category::Misc`].
pub const CATEGORY_KEYWORDS: &[(&str, Category)] = &[
    (
        "COMMUNITY ORGANIZATIONS AND ASSOCIATIONS YOUTH ORGANIZATIONS",
        Category::Bill,
    ),
    ("COMMUNITY EDUCATION COLLEGES AND UNIVERSITIES", Category::Bill),
    ("FOOD AND DRINK RESTAURANTS FAST FOOD", Category::Takeout),
    ("SHOPS SUPERMARKETS AND GROCERIES", Category::Grocery),
    ("SHOPS FOOD AND BEVERAGE STORE", Category::Takeout),
    ("SERVICE FINANCIAL LOANS AND MORTGAGES", Category::Debt),
    ("TRANSFER INTERNAL ACCOUNT TRANSFER", Category::Bill),
    ("HEALTHCARE HEALTHCARE SERVICES", Category::Bill),
    ("SERVICE ENTERTAINMENT", Category::Ent),
    ("TRAVEL GAS STATIONS", Category::Bill),
    ("TRANSFER DEPOSIT", Category::Saving),
    ("TRANSFER DEBIT", Category::Bill),
    ("TRANSFER CREDIT", Category::Bill),
    ("PAYMENT CREDIT CARD", Category::Bill),
    ("GROCERIES", Category::Grocery),
    ("INCOME", Category::Saving),
    ("LOAN", Category::Debt),
    ("BANK FEES", Category::Bill),
    ("ENTERTAINMENT", Category::Ent),
    ("FOOD AND DRINK", Category::Takeout),
    ("HOME IMPROVEMENT", Category::Bill),
    ("MEDICAL", Category::Bill),
    ("GENERAL SERVICES", Category::Bill),
    ("GOVERNMENT AND NON PROFIT", Category::Bill),
    ("TRANSPORTATION", Category::Bill),
    ("TRAVEL", Category::Ent),
    ("RENT AND UTILITIES", Category::Bill),
    ("TRANSFER", Category::Bill),
];

/// Classify a transaction from its provider category labels.
///
/// Labels are tried in order and the first one that matches a keyword decides
/// the category. Returns [`Category::Misc`] for an empty list or when no label
/// matches.
pub fn classify<S: AsRef<str>>(labels: &[S]) -> Category {
    labels
        .iter()
        .find_map(|label| match_label(label.as_ref()))
        .unwrap_or(Category::Misc)
}

/// Look up a single label in [`CATEGORY_KEYWORDS`].
///
/// Matching is case-insensitive and treats `_` as a space, so personal finance
/// codes such as `FOOD_AND_DRINK_FAST_FOOD` match the same keywords as
/// `Food and Drink`.
pub fn match_label(label: &str) -> Option<Category> {
    let normalized = normalize_label(label);
    if normalized.is_empty() {
        return None;
    }
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|(_, category)| *category)
}

fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_uppercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_labels_are_misc() {
        let labels: Vec<String> = Vec::new();
        assert_eq!(classify(&labels), Category::Misc);
    }

    #[test]
    fn test_restaurants_are_takeout() {
        assert_eq!(classify(&["FOOD AND DRINK RESTAURANTS"]), Category::Takeout);
    }

    #[test]
    fn test_unknown_label_is_misc() {
        assert_eq!(classify(&["UNKNOWN LABEL"]), Category::Misc);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify(&["Food and Drink"]), Category::Takeout);
        assert_eq!(classify(&["rent and utilities"]), Category::Bill);
    }

    #[test]
    fn test_personal_finance_codes_match() {
        assert_eq!(classify(&["FOOD_AND_DRINK_FAST_FOOD"]), Category::Takeout);
        assert_eq!(classify(&["FOOD_AND_DRINK_GROCERIES"]), Category::Grocery);
        assert_eq!(classify(&["LOAN_PAYMENTS"]), Category::Debt);
    }

    #[test]
    fn test_specific_keywords_win_over_general() {
        assert_eq!(classify(&["Transfer Deposit"]), Category::Saving);
        assert_eq!(classify(&["Transfer"]), Category::Bill);
        assert_eq!(classify(&["Travel Gas Stations"]), Category::Bill);
        assert_eq!(classify(&["Travel"]), Category::Ent);
        assert_eq!(classify(&["Shops Supermarkets and Groceries"]), Category::Grocery);
    }

    #[test]
    fn test_first_matching_label_wins() {
        assert_eq!(
            classify(&["Shops", "Travel", "Food and Drink"]),
            Category::Ent
        );
        assert_eq!(classify(&["", "  ", "Income"]), Category::Saving);
    }

    #[test]
    fn test_keyword_table_has_no_shadowed_entries() {
        for (i, (later, _)) in CATEGORY_KEYWORDS.iter().enumerate() {
            for (earlier, _) in &CATEGORY_KEYWORDS[..i] {
                assert!(
                    !later.contains(earlier),
                    "'{}' can never match because '{}' comes first",
                    later,
                    earlier
                );
            }
        }
    }
}

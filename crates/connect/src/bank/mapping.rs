//! Conversion of aggregator transactions into budget expenses.

use budget_core::classifier::classify;
use budget_core::errors::{Error, Result};
use budget_core::expenses::Expense;
use budget_core::utils::time_utils::parse_date;

use super::models::BankTransaction;

/// Category labels for a transaction, most specific first.
///
/// The legacy hierarchy is tried joined (`"Shops Supermarkets and Groceries"`)
/// before its individual levels, then the personal finance category detail and
/// primary codes.
pub fn category_labels(transaction: &BankTransaction) -> Vec<String> {
    let mut labels = Vec::new();

    if let Some(hierarchy) = transaction.category.as_ref().filter(|h| !h.is_empty()) {
        if hierarchy.len() > 1 {
            labels.push(hierarchy.join(" "));
        }
        labels.extend(hierarchy.iter().rev().cloned());
    }

    if let Some(pfc) = &transaction.personal_finance_category {
        labels.extend(pfc.detailed.iter().cloned());
        labels.extend(pfc.primary.iter().cloned());
    }

    labels
}

/// Map one transaction to an expense, classifying it from its labels.
pub fn to_expense(transaction: &BankTransaction) -> Result<Expense> {
    let date = parse_date(&transaction.date).map_err(|e| {
        Error::Upstream(format!(
            "Transaction '{}' has an invalid date '{}': {}",
            transaction.name, transaction.date, e
        ))
    })?;

    Ok(Expense {
        date,
        description: transaction.name.clone(),
        amount: transaction.amount,
        category: classify(&category_labels(transaction)),
    })
}

/// Map a page of transactions, failing on the first malformed one.
pub fn to_expenses(transactions: &[BankTransaction]) -> Result<Vec<Expense>> {
    transactions.iter().map(to_expense).collect()
}

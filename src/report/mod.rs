use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::DATE_FORMAT;
use crate::models::{ExpenseRecord, IncomeRecord};

/// Account overview figures. Recomputed from scratch on every view;
/// fine at personal-ledger row counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Totals {
    pub(crate) total_income: Decimal,
    pub(crate) total_expense: Decimal,
    pub(crate) net_balance: Decimal,
}

/// Sums the given rows, skipping any whose amount failed to parse at
/// load time.
pub(crate) fn totals(income: &[IncomeRecord], expenses: &[ExpenseRecord]) -> Totals {
    let total_income: Decimal = income.iter().filter_map(|r| r.amount).sum();
    let total_expense: Decimal = expenses.iter().filter_map(|r| r.amount).sum();
    Totals {
        total_income,
        total_expense,
        net_balance: total_income - total_expense,
    }
}

/// Expense sum per category, largest first for chart display.
pub(crate) fn expenses_by_category(expenses: &[ExpenseRecord]) -> Vec<(String, Decimal)> {
    let mut groups: BTreeMap<&str, Decimal> = BTreeMap::new();
    for rec in expenses {
        let Some(amount) = rec.amount else { continue };
        *groups.entry(rec.category.as_str()).or_default() += amount;
    }
    let mut result: Vec<(String, Decimal)> = groups
        .into_iter()
        .map(|(name, sum)| (name.to_string(), sum))
        .collect();
    result.sort_by(|a, b| b.1.cmp(&a.1));
    result
}

/// Income sum per calendar month ("YYYY-MM"), oldest first. Rows whose
/// date does not parse are dropped, matching the skip of unparseable
/// amounts.
pub(crate) fn income_by_month(income: &[IncomeRecord]) -> Vec<(String, Decimal)> {
    let mut groups: BTreeMap<String, Decimal> = BTreeMap::new();
    for rec in income {
        let Some(amount) = rec.amount else { continue };
        let Ok(date) = NaiveDate::parse_from_str(&rec.date, DATE_FORMAT) else {
            continue;
        };
        *groups.entry(date.format("%Y-%m").to_string()).or_default() += amount;
    }
    // BTreeMap iteration is already chronological for YYYY-MM keys
    groups.into_iter().collect()
}

#[cfg(test)]
mod tests;

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{ExpenseRecord, IncomeRecord};

fn income(date: &str, amount: Decimal) -> IncomeRecord {
    IncomeRecord::new("bob".into(), date.into(), "Salary".into(), amount)
}

fn expense(date: &str, amount: Decimal, category: &str) -> ExpenseRecord {
    ExpenseRecord::new("bob".into(), date.into(), amount, category.into(), String::new())
}

// ── Totals ────────────────────────────────────────────────────

#[test]
fn test_totals() {
    let inc = vec![income("2025-01-10", dec!(100)), income("2025-02-10", dec!(200))];
    let exp = vec![expense("2025-01-15", dec!(50), "Food")];

    let t = totals(&inc, &exp);
    assert_eq!(t.total_income, dec!(300));
    assert_eq!(t.total_expense, dec!(50));
    assert_eq!(t.net_balance, dec!(250));
}

#[test]
fn test_totals_empty() {
    let t = totals(&[], &[]);
    assert_eq!(t.total_income, Decimal::ZERO);
    assert_eq!(t.total_expense, Decimal::ZERO);
    assert_eq!(t.net_balance, Decimal::ZERO);
}

#[test]
fn test_totals_negative_balance() {
    let inc = vec![income("2025-01-10", dec!(100))];
    let exp = vec![expense("2025-01-15", dec!(150), "Rent")];
    assert_eq!(totals(&inc, &exp).net_balance, dec!(-50));
}

#[test]
fn test_totals_skip_unparsed_amounts() {
    let mut bad = income("2025-01-10", dec!(100));
    bad.amount = None;
    let inc = vec![bad, income("2025-01-11", dec!(25))];

    let mut bad_exp = expense("2025-01-15", dec!(999), "Food");
    bad_exp.amount = None;
    let exp = vec![bad_exp, expense("2025-01-16", dec!(5), "Food")];

    let t = totals(&inc, &exp);
    assert_eq!(t.total_income, dec!(25));
    assert_eq!(t.total_expense, dec!(5));
    assert_eq!(t.net_balance, dec!(20));
}

// ── Category breakdown ────────────────────────────────────────

#[test]
fn test_expenses_by_category_groups_and_sorts() {
    let exp = vec![
        expense("2025-01-01", dec!(10), "Food"),
        expense("2025-01-02", dec!(40), "Rent"),
        expense("2025-01-03", dec!(15), "Food"),
    ];

    let breakdown = expenses_by_category(&exp);
    assert_eq!(
        breakdown,
        vec![("Rent".to_string(), dec!(40)), ("Food".to_string(), dec!(25))]
    );
}

#[test]
fn test_expenses_by_category_skips_unparsed() {
    let mut bad = expense("2025-01-01", dec!(99), "Food");
    bad.amount = None;
    let breakdown = expenses_by_category(&[bad]);
    assert!(breakdown.is_empty());
}

#[test]
fn test_expenses_by_category_distinct_case_is_distinct_group() {
    // Grouping is by the stored string; the ledger canonicalizes case at
    // entry, the report does not re-fold it.
    let exp = vec![
        expense("2025-01-01", dec!(10), "Food"),
        expense("2025-01-02", dec!(20), "food"),
    ];
    assert_eq!(expenses_by_category(&exp).len(), 2);
}

// ── Monthly income ────────────────────────────────────────────

#[test]
fn test_income_by_month_groups_chronologically() {
    let inc = vec![
        income("2025-03-10", dec!(300)),
        income("2025-01-10", dec!(100)),
        income("2025-01-25", dec!(50)),
        income("2024-12-31", dec!(75)),
    ];

    let series = income_by_month(&inc);
    assert_eq!(
        series,
        vec![
            ("2024-12".to_string(), dec!(75)),
            ("2025-01".to_string(), dec!(150)),
            ("2025-03".to_string(), dec!(300)),
        ]
    );
}

#[test]
fn test_income_by_month_drops_bad_dates() {
    let inc = vec![income("not-a-date", dec!(100)), income("2025-01-10", dec!(50))];
    let series = income_by_month(&inc);
    assert_eq!(series, vec![("2025-01".to_string(), dec!(50))]);
}

#[test]
fn test_income_by_month_empty() {
    assert!(income_by_month(&[]).is_empty());
}

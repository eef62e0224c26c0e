#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;
use tempfile::TempDir;

use super::*;
use crate::error::Error;
use crate::store::Store;

fn open_temp_store() -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path()).unwrap();
    (dir, store)
}

// ── Income ────────────────────────────────────────────────────

#[test]
fn test_add_income() {
    let (_dir, store) = open_temp_store();
    add_income(&store, "bob", "2025-03-01", "Salary", dec!(1500)).unwrap();

    let records = list_income(&store, "bob").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source, "Salary");
    assert_eq!(records[0].amount, Some(dec!(1500)));
}

#[test]
fn test_add_income_rejects_empty_source() {
    let (_dir, store) = open_temp_store();
    let err = add_income(&store, "bob", "2025-03-01", "  ", dec!(100)).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(store.load_income().unwrap().is_empty());
}

#[test]
fn test_add_income_rejects_nonpositive_amount() {
    let (_dir, store) = open_temp_store();
    assert!(add_income(&store, "bob", "2025-03-01", "Salary", dec!(0)).is_err());
    assert!(add_income(&store, "bob", "2025-03-01", "Salary", dec!(-5)).is_err());
    assert!(store.load_income().unwrap().is_empty());
}

#[test]
fn test_add_income_rejects_bad_date() {
    let (_dir, store) = open_temp_store();
    assert!(add_income(&store, "bob", "03/01/2025", "Salary", dec!(100)).is_err());
    assert!(add_income(&store, "bob", "2025-13-01", "Salary", dec!(100)).is_err());
    assert!(store.load_income().unwrap().is_empty());
}

#[test]
fn test_list_income_filters_by_user_and_sorts_desc() {
    let (_dir, store) = open_temp_store();
    add_income(&store, "bob", "2025-01-10", "Salary", dec!(100)).unwrap();
    add_income(&store, "alice", "2025-01-20", "Salary", dec!(999)).unwrap();
    add_income(&store, "bob", "2025-02-10", "Bonus", dec!(200)).unwrap();

    let records = list_income(&store, "bob").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, "2025-02-10");
    assert_eq!(records[1].date, "2025-01-10");
}

#[test]
fn test_list_income_exact_username_match() {
    let (_dir, store) = open_temp_store();
    add_income(&store, "Bob", "2025-01-10", "Salary", dec!(100)).unwrap();
    assert!(list_income(&store, "bob").unwrap().is_empty());
}

// ── Expenses ──────────────────────────────────────────────────

#[test]
fn test_add_expense() {
    let (_dir, store) = open_temp_store();
    add_category(&store, "bob", "Food").unwrap();
    add_expense(&store, "bob", "2025-03-02", dec!(42.50), "Food", "lunch").unwrap();

    let records = list_expenses(&store, "bob").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category, "Food");
    assert_eq!(records[0].note, "lunch");
}

#[test]
fn test_add_expense_rejects_nonpositive_amount() {
    let (_dir, store) = open_temp_store();
    add_category(&store, "bob", "Food").unwrap();

    let before = store.load_expenses().unwrap().len();
    assert!(add_expense(&store, "bob", "2025-03-02", dec!(0), "Food", "").is_err());
    assert!(add_expense(&store, "bob", "2025-03-02", dec!(-1), "Food", "").is_err());
    // No row appended
    assert_eq!(store.load_expenses().unwrap().len(), before);
}

#[test]
fn test_add_expense_requires_existing_category() {
    let (_dir, store) = open_temp_store();
    let err = add_expense(&store, "bob", "2025-03-02", dec!(10), "Food", "").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(store.load_expenses().unwrap().is_empty());
}

#[test]
fn test_add_expense_category_match_is_case_insensitive() {
    let (_dir, store) = open_temp_store();
    add_category(&store, "bob", "Food").unwrap();
    add_expense(&store, "bob", "2025-03-02", dec!(10), "food", "").unwrap();

    // Stored under the canonical category name
    let records = list_expenses(&store, "bob").unwrap();
    assert_eq!(records[0].category, "Food");
}

#[test]
fn test_add_expense_category_owned_by_other_user() {
    let (_dir, store) = open_temp_store();
    add_category(&store, "alice", "Food").unwrap();
    assert!(add_expense(&store, "bob", "2025-03-02", dec!(10), "Food", "").is_err());
}

#[test]
fn test_add_expense_allows_empty_note() {
    let (_dir, store) = open_temp_store();
    add_category(&store, "bob", "Food").unwrap();
    add_expense(&store, "bob", "2025-03-02", dec!(10), "Food", "").unwrap();
    assert_eq!(list_expenses(&store, "bob").unwrap()[0].note, "");
}

#[test]
fn test_list_expenses_sorted_desc() {
    let (_dir, store) = open_temp_store();
    add_category(&store, "bob", "Food").unwrap();
    add_expense(&store, "bob", "2025-01-05", dec!(10), "Food", "").unwrap();
    add_expense(&store, "bob", "2025-03-05", dec!(20), "Food", "").unwrap();
    add_expense(&store, "bob", "2025-02-05", dec!(30), "Food", "").unwrap();

    let records = list_expenses(&store, "bob").unwrap();
    let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-03-05", "2025-02-05", "2025-01-05"]);
}

// ── Categories ────────────────────────────────────────────────

#[test]
fn test_add_category() {
    let (_dir, store) = open_temp_store();
    add_category(&store, "bob", "Food").unwrap();

    let cats = list_categories(&store, "bob").unwrap();
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].category, "Food");
}

#[test]
fn test_add_category_trims_name() {
    let (_dir, store) = open_temp_store();
    add_category(&store, "bob", "  Food  ").unwrap();
    assert_eq!(list_categories(&store, "bob").unwrap()[0].category, "Food");
}

#[test]
fn test_add_category_rejects_empty() {
    let (_dir, store) = open_temp_store();
    assert!(matches!(
        add_category(&store, "bob", "   "),
        Err(Error::Validation(_))
    ));
}

#[test]
fn test_add_category_duplicate_case_variant_rejected() {
    let (_dir, store) = open_temp_store();
    add_category(&store, "bob", "Food").unwrap();
    assert!(matches!(
        add_category(&store, "bob", "food"),
        Err(Error::Conflict(_))
    ));
    assert!(matches!(
        add_category(&store, "bob", "FOOD"),
        Err(Error::Conflict(_))
    ));
    // Exactly one row remains
    assert_eq!(list_categories(&store, "bob").unwrap().len(), 1);
}

#[test]
fn test_same_category_name_allowed_per_user() {
    let (_dir, store) = open_temp_store();
    add_category(&store, "bob", "Food").unwrap();
    add_category(&store, "alice", "Food").unwrap();
    assert_eq!(list_categories(&store, "bob").unwrap().len(), 1);
    assert_eq!(list_categories(&store, "alice").unwrap().len(), 1);
}

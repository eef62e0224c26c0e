#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── User ──────────────────────────────────────────────────────

#[test]
fn test_username_taken_case_insensitive() {
    let users = vec![User::new("Bob".into(), "secret".into())];
    assert!(User::username_taken(&users, "Bob"));
    assert!(User::username_taken(&users, "bob"));
    assert!(User::username_taken(&users, "BOB"));
    assert!(!User::username_taken(&users, "alice"));
}

#[test]
fn test_username_taken_empty_table() {
    assert!(!User::username_taken(&[], "anyone"));
}

#[test]
fn test_find_credentials_exact_case() {
    let users = vec![
        User::new("Bob".into(), "secret".into()),
        User::new("alice".into(), "hunter2".into()),
    ];
    assert!(User::find_credentials(&users, "Bob", "secret").is_some());
    // Same user, different username case: no match
    assert!(User::find_credentials(&users, "bob", "secret").is_none());
    // Wrong password: no match
    assert!(User::find_credentials(&users, "Bob", "Secret").is_none());
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_find_for_user_case_insensitive_name() {
    let cats = vec![
        Category::new("bob".into(), "Food".into()),
        Category::new("alice".into(), "Travel".into()),
    ];
    assert!(Category::find_for_user(&cats, "bob", "food").is_some());
    assert!(Category::find_for_user(&cats, "bob", "FOOD").is_some());
    assert!(Category::find_for_user(&cats, "bob", "Travel").is_none());
    // Username comparison stays exact
    assert!(Category::find_for_user(&cats, "Bob", "Food").is_none());
}

#[test]
fn test_category_display() {
    let cat = Category::new("bob".into(), "Groceries".into());
    assert_eq!(format!("{cat}"), "Groceries");
}

// ── Records ───────────────────────────────────────────────────

#[test]
fn test_income_new_has_amount() {
    let rec = IncomeRecord::new("bob".into(), "2025-03-01".into(), "Salary".into(), dec!(1500));
    assert_eq!(rec.amount, Some(dec!(1500)));
}

#[test]
fn test_expense_new_has_amount() {
    let rec = ExpenseRecord::new(
        "bob".into(),
        "2025-03-02".into(),
        dec!(42.50),
        "Food".into(),
        "lunch".into(),
    );
    assert_eq!(rec.amount, Some(dec!(42.50)));
    assert_eq!(rec.category, "Food");
}

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::{Category, ExpenseRecord, IncomeRecord};
use crate::store::Store;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

fn validate_date(date: &str) -> Result<()> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| Error::validation(format!("Invalid date '{date}' (expected YYYY-MM-DD)")))
}

fn validate_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::validation("Amount must be greater than zero"));
    }
    Ok(())
}

// ── Income ────────────────────────────────────────────────────

pub(crate) fn add_income(
    store: &Store,
    username: &str,
    date: &str,
    source: &str,
    amount: Decimal,
) -> Result<()> {
    let source = source.trim();
    if source.is_empty() {
        return Err(Error::validation("Please enter a valid source"));
    }
    validate_date(date)?;
    validate_amount(amount)?;

    store.append_income(&IncomeRecord::new(
        username.to_string(),
        date.to_string(),
        source.to_string(),
        amount,
    ))
}

/// The user's income rows, newest date first.
pub(crate) fn list_income(store: &Store, username: &str) -> Result<Vec<IncomeRecord>> {
    let mut records: Vec<IncomeRecord> = store
        .load_income()?
        .into_iter()
        .filter(|r| r.username == username)
        .collect();
    records.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(records)
}

// ── Expenses ──────────────────────────────────────────────────

pub(crate) fn add_expense(
    store: &Store,
    username: &str,
    date: &str,
    amount: Decimal,
    category: &str,
    note: &str,
) -> Result<()> {
    validate_date(date)?;
    validate_amount(amount)?;

    let category = category.trim();
    if category.is_empty() {
        return Err(Error::validation("Please choose a category"));
    }
    let categories = store.load_categories()?;
    let Some(existing) = Category::find_for_user(&categories, username, category) else {
        return Err(Error::validation(format!(
            "Category '{category}' does not exist. Add it first."
        )));
    };

    store.append_expense(&ExpenseRecord::new(
        username.to_string(),
        date.to_string(),
        amount,
        existing.category.clone(),
        note.trim().to_string(),
    ))
}

/// The user's expense rows, newest date first.
pub(crate) fn list_expenses(store: &Store, username: &str) -> Result<Vec<ExpenseRecord>> {
    let mut records: Vec<ExpenseRecord> = store
        .load_expenses()?
        .into_iter()
        .filter(|r| r.username == username)
        .collect();
    records.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(records)
}

// ── Categories ────────────────────────────────────────────────

/// Adds a category for the user unless one already exists under any
/// case variant, so "Food" then "food" leaves a single row.
pub(crate) fn add_category(store: &Store, username: &str, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::validation("Category name cannot be empty"));
    }

    let categories = store.load_categories()?;
    if Category::find_for_user(&categories, username, name).is_some() {
        return Err(Error::conflict(format!("Category '{name}' already exists")));
    }

    store.append_category(&Category::new(username.to_string(), name.to_string()))
}

/// The user's categories in file order.
pub(crate) fn list_categories(store: &Store, username: &str) -> Result<Vec<Category>> {
    Ok(store
        .load_categories()?
        .into_iter()
        .filter(|c| c.username == username)
        .collect())
}

#[cfg(test)]
mod tests;

mod schema;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::{Category, ExpenseRecord, IncomeRecord, User};

pub(crate) use schema::Table;

/// Flat-file record store. Every table is one whole-file CSV: reads scan
/// the full file, writes replace it. `append_*` is load + push + save, so
/// two concurrent writers race and the last save wins — tolerable for a
/// single local user, and the documented limit of this storage layer.
pub(crate) struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Opens the store, creating the data directory and a header-only
    /// file for any table that does not exist yet.
    pub(crate) fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let store = Self {
            data_dir: data_dir.to_path_buf(),
        };
        for &table in Table::all() {
            store.ensure_table(table)?;
        }
        Ok(store)
    }

    fn table_path(&self, table: Table) -> PathBuf {
        self.data_dir.join(table.file_name())
    }

    fn ensure_table(&self, table: Table) -> Result<()> {
        let path = self.table_path(table);
        if path.exists() {
            return Ok(());
        }
        let mut wtr = csv::Writer::from_path(&path)?;
        wtr.write_record(table.columns())?;
        wtr.flush()?;
        Ok(())
    }

    /// Whole-file read. A missing file is recreated header-only and reads
    /// as an empty table. Rows shorter than the schema read their missing
    /// cells as empty strings.
    fn read_rows(&self, table: Table) -> Result<Vec<csv::StringRecord>> {
        self.ensure_table(table)?;
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(self.table_path(table))?;
        let mut rows = Vec::new();
        for result in rdr.records() {
            rows.push(result?);
        }
        Ok(rows)
    }

    /// Whole-file overwrite: header plus every row. No partial write, no
    /// transaction log.
    fn write_rows<I, R>(&self, table: Table, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = String>,
    {
        let mut wtr = csv::Writer::from_path(self.table_path(table))?;
        wtr.write_record(table.columns())?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    // ── Users ─────────────────────────────────────────────────

    pub(crate) fn load_users(&self) -> Result<Vec<User>> {
        Ok(self
            .read_rows(Table::Users)?
            .iter()
            .map(|rec| User {
                username: field(rec, 0),
                password: field(rec, 1),
            })
            .collect())
    }

    pub(crate) fn save_users(&self, users: &[User]) -> Result<()> {
        self.write_rows(
            Table::Users,
            users
                .iter()
                .map(|u| vec![u.username.clone(), u.password.clone()]),
        )
    }

    pub(crate) fn append_user(&self, user: &User) -> Result<()> {
        let mut users = self.load_users()?;
        users.push(user.clone());
        self.save_users(&users)
    }

    // ── Categories ────────────────────────────────────────────

    pub(crate) fn load_categories(&self) -> Result<Vec<Category>> {
        Ok(self
            .read_rows(Table::Categories)?
            .iter()
            .map(|rec| Category {
                username: field(rec, 0),
                category: field(rec, 1),
            })
            .collect())
    }

    pub(crate) fn save_categories(&self, categories: &[Category]) -> Result<()> {
        self.write_rows(
            Table::Categories,
            categories
                .iter()
                .map(|c| vec![c.username.clone(), c.category.clone()]),
        )
    }

    pub(crate) fn append_category(&self, category: &Category) -> Result<()> {
        let mut categories = self.load_categories()?;
        categories.push(category.clone());
        self.save_categories(&categories)
    }

    // ── Income ────────────────────────────────────────────────

    pub(crate) fn load_income(&self) -> Result<Vec<IncomeRecord>> {
        Ok(self
            .read_rows(Table::Income)?
            .iter()
            .map(|rec| IncomeRecord {
                username: field(rec, 0),
                date: field(rec, 1),
                source: field(rec, 2),
                amount: amount_field(rec, 3),
            })
            .collect())
    }

    pub(crate) fn save_income(&self, records: &[IncomeRecord]) -> Result<()> {
        self.write_rows(
            Table::Income,
            records.iter().map(|r| {
                vec![
                    r.username.clone(),
                    r.date.clone(),
                    r.source.clone(),
                    amount_cell(r.amount),
                ]
            }),
        )
    }

    pub(crate) fn append_income(&self, record: &IncomeRecord) -> Result<()> {
        let mut records = self.load_income()?;
        records.push(record.clone());
        self.save_income(&records)
    }

    // ── Expenses ──────────────────────────────────────────────

    pub(crate) fn load_expenses(&self) -> Result<Vec<ExpenseRecord>> {
        Ok(self
            .read_rows(Table::Expenses)?
            .iter()
            .map(|rec| ExpenseRecord {
                username: field(rec, 0),
                date: field(rec, 1),
                amount: amount_field(rec, 2),
                category: field(rec, 3),
                note: field(rec, 4),
            })
            .collect())
    }

    pub(crate) fn save_expenses(&self, records: &[ExpenseRecord]) -> Result<()> {
        self.write_rows(
            Table::Expenses,
            records.iter().map(|r| {
                vec![
                    r.username.clone(),
                    r.date.clone(),
                    amount_cell(r.amount),
                    r.category.clone(),
                    r.note.clone(),
                ]
            }),
        )
    }

    pub(crate) fn append_expense(&self, record: &ExpenseRecord) -> Result<()> {
        let mut records = self.load_expenses()?;
        records.push(record.clone());
        self.save_expenses(&records)
    }
}

fn field(rec: &csv::StringRecord, i: usize) -> String {
    rec.get(i).unwrap_or("").trim().to_string()
}

/// Schema-on-read for amounts: a cell that is empty or does not parse as
/// a decimal loads as `None` instead of failing the whole table.
fn amount_field(rec: &csv::StringRecord, i: usize) -> Option<Decimal> {
    let raw = rec.get(i).unwrap_or("").trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw).ok()
}

fn amount_cell(amount: Option<Decimal>) -> String {
    amount.map(|a| a.to_string()).unwrap_or_default()
}

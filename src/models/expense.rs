use rust_decimal::Decimal;

/// One expense row. `amount` is `None` when the stored cell did not parse
/// as a number; aggregation skips such rows.
#[derive(Debug, Clone)]
pub struct ExpenseRecord {
    pub username: String,
    pub date: String,
    pub amount: Option<Decimal>,
    pub category: String,
    pub note: String,
}

impl ExpenseRecord {
    pub fn new(
        username: String,
        date: String,
        amount: Decimal,
        category: String,
        note: String,
    ) -> Self {
        Self {
            username,
            date,
            amount: Some(amount),
            category,
            note,
        }
    }
}

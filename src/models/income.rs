use rust_decimal::Decimal;

/// One income row. `amount` is `None` when the stored cell did not parse
/// as a number; aggregation skips such rows.
#[derive(Debug, Clone)]
pub struct IncomeRecord {
    pub username: String,
    pub date: String,
    pub source: String,
    pub amount: Option<Decimal>,
}

impl IncomeRecord {
    pub fn new(username: String, date: String, source: String, amount: Decimal) -> Self {
        Self {
            username,
            date,
            source,
            amount: Some(amount),
        }
    }
}

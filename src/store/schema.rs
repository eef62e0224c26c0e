/// The four record tables. Each persists as one CSV file with a header
/// row under the data directory; no keys, no cross-table constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Table {
    Users,
    Categories,
    Income,
    Expenses,
}

impl Table {
    pub(crate) fn all() -> &'static [Table] {
        &[Self::Users, Self::Categories, Self::Income, Self::Expenses]
    }

    pub(crate) fn file_name(self) -> &'static str {
        match self {
            Self::Users => "users.csv",
            Self::Categories => "categories.csv",
            Self::Income => "income.csv",
            Self::Expenses => "expenses.csv",
        }
    }

    pub(crate) fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Users => &["username", "password"],
            Self::Categories => &["username", "category"],
            Self::Income => &["username", "date", "source", "amount"],
            Self::Expenses => &["username", "date", "amount", "category", "note"],
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Users => write!(f, "users"),
            Self::Categories => write!(f, "categories"),
            Self::Income => write!(f, "income"),
            Self::Expenses => write!(f, "expenses"),
        }
    }
}

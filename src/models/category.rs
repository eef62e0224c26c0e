#[derive(Debug, Clone)]
pub struct Category {
    pub username: String,
    pub category: String,
}

impl Category {
    pub fn new(username: String, category: String) -> Self {
        Self { username, category }
    }

    /// Find a user's category by name (case-insensitive on the name,
    /// exact on the username).
    pub fn find_for_user<'a>(
        categories: &'a [Category],
        username: &str,
        name: &str,
    ) -> Option<&'a Category> {
        let lower = name.to_lowercase();
        categories
            .iter()
            .find(|c| c.username == username && c.category.to_lowercase() == lower)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.category)
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    /// Whether any user already holds this username, compared
    /// case-insensitively. Registration uses this check.
    pub fn username_taken(users: &[User], username: &str) -> bool {
        let lower = username.to_lowercase();
        users.iter().any(|u| u.username.to_lowercase() == lower)
    }

    /// Exact-case credential match. Login uses this, so a user registered
    /// as "Bob" cannot sign in as "bob".
    pub fn find_credentials<'a>(
        users: &'a [User],
        username: &str,
        password: &str,
    ) -> Option<&'a User> {
        users
            .iter()
            .find(|u| u.username == username && u.password == password)
    }
}

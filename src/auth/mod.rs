use crate::error::{Error, Result};
use crate::models::User;
use crate::store::Store;

/// Explicit per-visit session state, owned by the app and handed to
/// whatever needs the current user. Anonymous until a login succeeds.
#[derive(Debug, Clone, Default)]
pub(crate) struct Session {
    pub(crate) logged_in: bool,
    pub(crate) username: String,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.logged_in
    }

    fn authenticate(&mut self, username: &str) {
        self.logged_in = true;
        self.username = username.to_string();
    }

    /// Idempotent: logging out an anonymous session is a no-op.
    pub(crate) fn logout(&mut self) {
        self.logged_in = false;
        self.username.clear();
    }
}

/// Creates a new user. The uniqueness check is case-insensitive, so
/// "Bob" blocks a later "bob". Registration does not log the user in.
pub(crate) fn register(store: &Store, username: &str, password: &str) -> Result<()> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(Error::validation("Username and password cannot be empty"));
    }

    let users = store.load_users()?;
    if User::username_taken(&users, username) {
        return Err(Error::conflict(format!(
            "Username '{username}' already exists"
        )));
    }

    store.append_user(&User::new(username.to_string(), password.to_string()))
}

/// Checks credentials with an exact, case-sensitive match and marks the
/// session authenticated on success. The asymmetry with registration's
/// case-insensitive uniqueness check is inherited behavior: a user
/// registered as "Bob" cannot sign in as "bob", and "bob" cannot be
/// registered either.
pub(crate) fn login(
    store: &Store,
    session: &mut Session,
    username: &str,
    password: &str,
) -> Result<()> {
    if username.is_empty() || password.is_empty() {
        return Err(Error::validation("Please enter both username and password"));
    }

    let users = store.load_users()?;
    match User::find_credentials(&users, username, password) {
        Some(user) => {
            session.authenticate(&user.username);
            Ok(())
        }
        None => Err(Error::Authentication),
    }
}

#[cfg(test)]
mod tests;

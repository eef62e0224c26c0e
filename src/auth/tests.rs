#![allow(clippy::unwrap_used)]

use tempfile::TempDir;

use super::*;
use crate::error::Error;
use crate::store::Store;

fn open_temp_store() -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path()).unwrap();
    (dir, store)
}

// ── Registration ──────────────────────────────────────────────

#[test]
fn test_register_creates_user() {
    let (_dir, store) = open_temp_store();
    register(&store, "bob", "secret").unwrap();

    let users = store.load_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "bob");
    assert_eq!(users[0].password, "secret");
}

#[test]
fn test_register_empty_fields_rejected() {
    let (_dir, store) = open_temp_store();
    assert!(matches!(
        register(&store, "", "pw"),
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        register(&store, "bob", ""),
        Err(Error::Validation(_))
    ));
    // Whitespace-only username counts as empty
    assert!(matches!(
        register(&store, "   ", "pw"),
        Err(Error::Validation(_))
    ));
    assert!(store.load_users().unwrap().is_empty());
}

#[test]
fn test_register_duplicate_rejected() {
    let (_dir, store) = open_temp_store();
    register(&store, "bob", "secret").unwrap();
    assert!(matches!(
        register(&store, "bob", "other"),
        Err(Error::Conflict(_))
    ));
    assert_eq!(store.load_users().unwrap().len(), 1);
}

#[test]
fn test_register_duplicate_case_variant_rejected() {
    let (_dir, store) = open_temp_store();
    register(&store, "Bob", "secret").unwrap();
    assert!(matches!(
        register(&store, "bob", "other"),
        Err(Error::Conflict(_))
    ));
    assert!(matches!(
        register(&store, "BOB", "other"),
        Err(Error::Conflict(_))
    ));
    assert_eq!(store.load_users().unwrap().len(), 1);
}

#[test]
fn test_register_does_not_authenticate() {
    let (_dir, store) = open_temp_store();
    let session = Session::new();
    register(&store, "bob", "secret").unwrap();
    assert!(!session.is_authenticated());
}

// ── Login ─────────────────────────────────────────────────────

#[test]
fn test_login_exact_match_authenticates() {
    let (_dir, store) = open_temp_store();
    register(&store, "Bob", "secret").unwrap();

    let mut session = Session::new();
    login(&store, &mut session, "Bob", "secret").unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.username, "Bob");
}

#[test]
fn test_login_case_variant_fails() {
    let (_dir, store) = open_temp_store();
    register(&store, "Bob", "secret").unwrap();

    // Registration considered "bob" a duplicate of "Bob", but login is
    // exact-case: the variant cannot sign in.
    let mut session = Session::new();
    let err = login(&store, &mut session, "bob", "secret").unwrap_err();
    assert!(matches!(err, Error::Authentication));
    assert!(!session.is_authenticated());
    assert!(session.username.is_empty());
}

#[test]
fn test_login_wrong_password_fails() {
    let (_dir, store) = open_temp_store();
    register(&store, "bob", "secret").unwrap();

    let mut session = Session::new();
    let err = login(&store, &mut session, "bob", "wrong").unwrap_err();
    assert!(matches!(err, Error::Authentication));
    assert!(!session.is_authenticated());
}

#[test]
fn test_login_unknown_user_fails() {
    let (_dir, store) = open_temp_store();
    let mut session = Session::new();
    let err = login(&store, &mut session, "nobody", "pw").unwrap_err();
    assert!(matches!(err, Error::Authentication));
}

#[test]
fn test_login_empty_fields_rejected() {
    let (_dir, store) = open_temp_store();
    let mut session = Session::new();
    assert!(matches!(
        login(&store, &mut session, "", "pw"),
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        login(&store, &mut session, "bob", ""),
        Err(Error::Validation(_))
    ));
}

// ── Logout ────────────────────────────────────────────────────

#[test]
fn test_logout_clears_session() {
    let (_dir, store) = open_temp_store();
    register(&store, "bob", "secret").unwrap();

    let mut session = Session::new();
    login(&store, &mut session, "bob", "secret").unwrap();
    session.logout();
    assert!(!session.is_authenticated());
    assert!(session.username.is_empty());
}

#[test]
fn test_logout_is_idempotent() {
    let mut session = Session::new();
    session.logout();
    session.logout();
    assert!(!session.is_authenticated());
}

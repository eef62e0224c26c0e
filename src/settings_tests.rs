#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_defaults() {
    let s = Settings::default();
    assert_eq!(s.currency, "PKR");
    assert!(s.data_dir.is_none());
}

#[test]
fn test_partial_json_fills_defaults() {
    let s: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(s.currency, "PKR");
    assert!(s.data_dir.is_none());
}

#[test]
fn test_full_json() {
    let s: Settings =
        serde_json::from_str(r#"{"currency": "USD", "data_dir": "/tmp/fintrack"}"#).unwrap();
    assert_eq!(s.currency, "USD");
    assert_eq!(s.data_dir.as_deref(), Some("/tmp/fintrack"));
}

#[test]
fn test_roundtrip() {
    let s = Settings {
        currency: "EUR".into(),
        data_dir: Some("/data".into()),
    };
    let json = serde_json::to_string(&s).unwrap();
    let back: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(back.currency, "EUR");
    assert_eq!(back.data_dir.as_deref(), Some("/data"));
}

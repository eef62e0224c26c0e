#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.5), "PKR"), "PKR 1,234.50");
    assert_eq!(format_amount(dec!(0), "PKR"), "PKR 0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-50), "PKR"), "-PKR 50.00");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89), "USD"), "USD 1,234,567.89");
}

#[test]
fn test_format_amount_rounds_to_cents() {
    assert_eq!(format_amount(dec!(9.999), "PKR"), "PKR 10.00");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate("abc", 10), "abc");
    assert_eq!(truncate("abc", 3), "abc");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("abcdef", 4), "abc…");
}

#[test]
fn test_truncate_zero() {
    assert_eq!(truncate("abc", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

// ── scroll helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_and_clamps() {
    let (mut idx, mut scroll) = (0, 0);
    scroll_down(&mut idx, &mut scroll, 3, 10);
    assert_eq!(idx, 1);
    scroll_down(&mut idx, &mut scroll, 3, 10);
    assert_eq!(idx, 2);
    // At the end: no further movement
    scroll_down(&mut idx, &mut scroll, 3, 10);
    assert_eq!(idx, 2);
}

#[test]
fn test_scroll_down_adjusts_scroll_past_page() {
    let (mut idx, mut scroll) = (1, 0);
    scroll_down(&mut idx, &mut scroll, 10, 2);
    assert_eq!(idx, 2);
    assert_eq!(scroll, 1);
}

#[test]
fn test_scroll_up_saturates() {
    let (mut idx, mut scroll) = (0, 0);
    scroll_up(&mut idx, &mut scroll);
    assert_eq!(idx, 0);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_to_bottom() {
    let (mut idx, mut scroll) = (0, 0);
    scroll_to_bottom(&mut idx, &mut scroll, 10, 4);
    assert_eq!(idx, 9);
    assert_eq!(scroll, 6);
}

#[test]
fn test_scroll_to_top() {
    let (mut idx, mut scroll) = (7, 5);
    scroll_to_top(&mut idx, &mut scroll);
    assert_eq!(idx, 0);
    assert_eq!(scroll, 0);
}

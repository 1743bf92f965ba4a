use strum::IntoEnumIterator;

use crate::{normalize, to_international, NumberCategory, PhoneNumber};

/// Raw inputs that should survive any normalization law.
const RAW_INPUTS: &[&str] = &[
    "",
    "   ",
    "abc",
    "02-(555)-5555",
    "+972 2-(555)-5555",
    "+972 50-123-4567",
    "972972501234",
    "00972501234567",
    "*1234",
    " * 27 00",
    "12*34",
    "**1234",
    "٠٥٠-١٢٣-٤٥٦٧",
    "1-800-123-456",
    "tel:+972-3-6123456;ext=12",
];

#[test]
fn normalize_keeps_digits_and_leading_marker_only() {
    for raw in RAW_INPUTS {
        let canonical = normalize(raw);
        let body = canonical.strip_prefix('*').unwrap_or(canonical.as_str());
        assert!(body.chars().all(|c| c.is_ascii_digit()), "{raw:?} -> {canonical:?}");
    }
}

#[test]
fn normalize_is_idempotent() {
    for raw in RAW_INPUTS {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once, "{raw:?}");
    }
}

#[test]
fn international_round_trip() {
    let locals = ["025555555", "0501234567", "0721234567", "097654321", "0000000000"];
    for local in locals {
        assert_eq!(normalize(&to_international(local)), local);
    }
}

// Every `isX` has an `isNotX` counterpart without any per-category code.
#[test]
fn every_category_resolves_by_name() {
    let number = PhoneNumber::create("+972 2-(555)-5555");
    for category in NumberCategory::iter() {
        let name: &'static str = category.into();
        let is = number.query(&fast_cat::concat_str!("is", name)).unwrap();
        let is_not = number.query(&fast_cat::concat_str!("isNot", name)).unwrap();
        assert_eq!(is, number.is(category), "{name}");
        assert_eq!(is_not, !is, "{name}");
        assert_eq!(number.is_not_named(name), !is, "{name}");
    }
}

//! Ordering over canonical GTINs.
//!
//! Values compare byte-wise on their canonical text, not numerically. Since
//! canonical values are unpadded, GTINs of different digit counts can order
//! against their magnitude: `"123"` sorts before `"93"`. Index ordering built
//! on this type depends on it, so it is kept as is.

use crate::domain::model::Gtin;
use std::cmp::Ordering;

pub fn to_text(gtin: &Gtin) -> String {
    gtin.as_str().to_owned()
}

/// Byte-wise three-way comparison of two canonical strings, as -1, 0 or 1.
pub fn compare_text(left: &str, right: &str) -> i32 {
    match left.as_bytes().cmp(right.as_bytes()) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

pub fn compare(left: &Gtin, right: &Gtin) -> i32 {
    compare_text(left.as_str(), right.as_str())
}

pub fn equal(left: &Gtin, right: &Gtin) -> bool {
    compare(left, right) == 0
}

pub fn not_equal(left: &Gtin, right: &Gtin) -> bool {
    compare(left, right) != 0
}

pub fn less_than(left: &Gtin, right: &Gtin) -> bool {
    compare(left, right) < 0
}

pub fn less_or_equal(left: &Gtin, right: &Gtin) -> bool {
    compare(left, right) <= 0
}

pub fn greater_than(left: &Gtin, right: &Gtin) -> bool {
    compare(left, right) > 0
}

pub fn greater_or_equal(left: &Gtin, right: &Gtin) -> bool {
    compare(left, right) >= 0
}

impl Ord for Gtin {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other).cmp(&0)
    }
}

impl PartialOrd for Gtin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

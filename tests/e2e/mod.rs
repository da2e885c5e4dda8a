//! Shared helpers for the integration tests.

use address_book::{AddressBook, Record};
use chrono::NaiveDate;

pub mod fixtures;

/// Build a date, panicking on an impossible one.
#[allow(dead_code)]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Names of the book's records in iteration order.
#[allow(dead_code)]
pub fn names(book: &AddressBook) -> Vec<String> {
    book.records().map(|r| r.name().to_string()).collect()
}

/// Assert that a record's phones are exactly `expected`, in order.
#[allow(dead_code)]
pub fn assert_phones(record: &Record, expected: &[&str]) {
    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, expected, "phones of {}", record.name());
}

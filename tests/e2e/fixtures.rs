//! Test fixtures and sample data.
//!
//! Reference week: 2024-01-01 is a Monday, so 2024-01-06 is a Saturday and
//! 2024-01-08 the following Monday.

use super::ymd;
use address_book::{AddressBook, Record};
use chrono::NaiveDate;

#[allow(dead_code)]
pub fn saturday() -> NaiveDate {
    ymd(2024, 1, 6)
}

#[allow(dead_code)]
pub fn monday() -> NaiveDate {
    ymd(2024, 1, 8)
}

#[allow(dead_code)]
pub fn wednesday() -> NaiveDate {
    ymd(2024, 1, 10)
}

/// Create a record with the given phones and no birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("valid name");
    for phone in phones {
        record.add_phone(phone).expect("valid phone");
    }
    record
}

/// Create a record with a birthday and no phones.
#[allow(dead_code)]
pub fn sample_birthday(name: &str, birthday: NaiveDate) -> Record {
    let mut record = Record::new(name).expect("valid name");
    record.add_birthday(birthday);
    record
}

/// The John/Jane book used throughout.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890", "5555555555"]));
    book.add_record(sample_record("Jane", &["9876543210"]));
    book
}

//! Data models for the address book.
//!
//! A [`Record`] owns one person's validated fields; an [`AddressBook`]
//! owns the records, keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;

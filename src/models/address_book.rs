//! AddressBook: the keyed collection of records.

use super::record::Record;
use crate::birthdays::{BirthdayScheduler, WeeklyBirthdays};
use chrono::{Local, NaiveDate};
use std::collections::HashMap;

/// Records keyed by name, at most one per name.
///
/// Iteration follows first-insertion order. Re-adding a name replaces the
/// record but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_some() {
            tracing::debug!(name = %key, "Record replaced");
        } else {
            tracing::debug!(name = %key, "Record added");
            self.order.push(key);
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for in-place edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`, if any. Returns the removed record.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        tracing::debug!(name = %name, "Record deleted");
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.records.get(key).map(|record| (key.as_str(), record)))
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.iter().map(|(_, record)| record)
    }

    /// Birthdays in the seven days starting at `today`, bucketed by weekday.
    pub fn get_birthdays_per_week(&self, today: NaiveDate) -> WeeklyBirthdays {
        BirthdayScheduler::new(today).schedule(self.iter())
    }

    /// Same as [`get_birthdays_per_week`](Self::get_birthdays_per_week) using the local date.
    pub fn birthdays_this_week(&self) -> WeeklyBirthdays {
        self.get_birthdays_per_week(Local::now().date_naive())
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Box<dyn Iterator<Item = &'a Record> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890"));

        let found = book.find("John").unwrap();
        assert_eq!(found.find_phone("1234567890"), Some("1234567890"));
        assert!(book.find("john").is_none());
    }

    #[test]
    fn test_add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890"));
        book.add_record(record("John", "5555555555"));

        assert_eq!(book.len(), 1);
        assert_eq!(
            book.find("John").unwrap().to_string(),
            "Contact name: John, phones: 5555555555"
        );
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890"));
        book.add_record(record("Jane", "9876543210"));
        book.add_record(record("John", "5555555555"));

        let names: Vec<&str> = book.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["John", "Jane"]);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890"));
        book.add_record(record("Jane", "9876543210"));

        assert!(book.delete("Jane").is_some());
        assert!(book.find("Jane").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890"));

        assert!(book.delete("Nobody").is_none());
        assert_eq!(book.len(), 1);
        assert!(book.find("John").is_some());
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890"));

        book.find_mut("John")
            .unwrap()
            .edit_phone("1234567890", "1112223333")
            .unwrap();
        assert_eq!(
            book.find("John").unwrap().to_string(),
            "Contact name: John, phones: 1112223333"
        );
    }

    #[test]
    fn test_into_iterator() {
        let mut book = AddressBook::new();
        assert!(book.is_empty());
        book.add_record(record("John", "1234567890"));
        book.add_record(record("Jane", "9876543210"));

        let names: Vec<String> = (&book)
            .into_iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, vec!["John", "Jane"]);
    }
}

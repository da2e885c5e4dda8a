//! Record model: one person's entry in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A contact: a name, an ordered list of phones, and an optional birthday.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        tracing::debug!(name = %self.name, phone = %phone, "Phone added");
        Ok(())
    }

    /// Remove every entry equal to `phone`. Removing an unknown number is a no-op.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        tracing::debug!(
            name = %self.name,
            removed = before - self.phones.len(),
            "Phone removed"
        );
    }

    /// Change the first entry equal to `old` into `new`.
    ///
    /// If nothing matches `old` the record is left untouched and `Ok(())` is
    /// returned, without validating `new`. If an entry matches and `new` is
    /// invalid, the error is returned and the entry keeps its old value.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        if let Some(phone) = self.phones.iter_mut().find(|p| p.as_str() == old) {
            phone.set_value(new)?;
            tracing::debug!(name = %self.name, old = %old, new = %new, "Phone edited");
        }
        Ok(())
    }

    /// Return the stored value of the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&str> {
        self.phones
            .iter()
            .map(Phone::as_str)
            .find(|p| *p == phone)
    }

    /// Set or replace the birthday.
    pub fn add_birthday(&mut self, date: NaiveDate) {
        self.birthday = Some(Birthday::new(date));
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}

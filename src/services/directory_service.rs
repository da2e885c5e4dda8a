//! Directory service layer.
//!
//! The single entry point a front end uses to reach the address book. One
//! `RwLock` guards every mutation and the birthday query.

use crate::birthdays::WeeklyBirthdays;
use crate::domain::Birthday;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{AddressBook, Record};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Parse a `YYYY-MM-DD` "today" supplied by a front end.
pub fn parse_today(text: &str) -> DirectoryResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
        DirectoryError::InvalidRequest(format!("Invalid date, expected YYYY-MM-DD: {}", text))
    })
}

/// Parameters for creating a contact in one call.
#[derive(Debug, Clone, Default)]
pub struct NewContactParams {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

/// Directory service trait for address book operations.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Create a contact and store it, replacing any contact with the same name.
    ///
    /// All fields are validated before anything is stored.
    async fn add_contact(&self, params: NewContactParams) -> DirectoryResult<Record>;

    /// Append a phone to an existing contact.
    async fn add_phone(&self, name: &str, phone: &str) -> DirectoryResult<Record>;

    /// Remove every matching phone from an existing contact.
    async fn remove_phone(&self, name: &str, phone: &str) -> DirectoryResult<Record>;

    /// Replace the first matching phone of an existing contact.
    async fn edit_phone(&self, name: &str, old: &str, new: &str) -> DirectoryResult<Record>;

    /// Look up a phone on a contact. A missing contact or phone is `None`.
    async fn find_phone(&self, name: &str, phone: &str) -> Option<String>;

    /// Set or replace the birthday of an existing contact.
    async fn set_birthday(&self, name: &str, birthday: &str) -> DirectoryResult<Record>;

    /// Look up a contact by exact name.
    async fn find_contact(&self, name: &str) -> Option<Record>;

    /// Delete a contact. Returns whether one was removed.
    async fn delete_contact(&self, name: &str) -> bool;

    /// All contacts in insertion order.
    async fn list_contacts(&self) -> Vec<Record>;

    /// Birthdays for the week starting at `today`, or the service's default today.
    async fn birthdays_per_week(&self, today: Option<NaiveDate>) -> WeeklyBirthdays;
}

/// Default implementation of DirectoryService over a shared in-memory book.
#[derive(Clone)]
pub struct DirectoryServiceImpl {
    book: Arc<RwLock<AddressBook>>,
    today: Option<NaiveDate>,
}

impl DirectoryServiceImpl {
    /// Create a service over an empty address book.
    pub fn new() -> Self {
        Self::with_book(AddressBook::new())
    }

    /// Create a service over an existing address book.
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            book: Arc::new(RwLock::new(book)),
            today: None,
        }
    }

    /// Pin the date used when a birthday query gives none.
    pub fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        self.today = today;
        self
    }

    fn resolve_today(&self, today: Option<NaiveDate>) -> NaiveDate {
        today
            .or(self.today)
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Apply `edit` to the named record under the write lock.
    async fn update<F>(&self, name: &str, edit: F) -> DirectoryResult<Record>
    where
        F: FnOnce(&mut Record) -> DirectoryResult<()> + Send,
    {
        let mut book = self.book.write().await;
        let record = book
            .find_mut(name)
            .ok_or_else(|| DirectoryError::ContactNotFound(name.to_string()))?;
        edit(record)?;
        Ok(record.clone())
    }
}

impl Default for DirectoryServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryService for DirectoryServiceImpl {
    async fn add_contact(&self, params: NewContactParams) -> DirectoryResult<Record> {
        let mut record = Record::new(params.name)?;
        for phone in &params.phones {
            record.add_phone(phone)?;
        }
        if let Some(text) = params.birthday.as_deref() {
            record.add_birthday(Birthday::parse(text)?.date());
        }

        tracing::info!(name = %record.name(), phones = record.phones().len(), "Contact stored");
        self.book.write().await.add_record(record.clone());
        Ok(record)
    }

    async fn add_phone(&self, name: &str, phone: &str) -> DirectoryResult<Record> {
        self.update(name, |record| Ok(record.add_phone(phone)?)).await
    }

    async fn remove_phone(&self, name: &str, phone: &str) -> DirectoryResult<Record> {
        self.update(name, |record| {
            record.remove_phone(phone);
            Ok(())
        })
        .await
    }

    async fn edit_phone(&self, name: &str, old: &str, new: &str) -> DirectoryResult<Record> {
        self.update(name, |record| Ok(record.edit_phone(old, new)?))
            .await
    }

    async fn find_phone(&self, name: &str, phone: &str) -> Option<String> {
        let book = self.book.read().await;
        book.find(name)
            .and_then(|record| record.find_phone(phone))
            .map(str::to_string)
    }

    async fn set_birthday(&self, name: &str, birthday: &str) -> DirectoryResult<Record> {
        let birthday = Birthday::parse(birthday)?;
        self.update(name, |record| {
            record.add_birthday(birthday.date());
            Ok(())
        })
        .await
    }

    async fn find_contact(&self, name: &str) -> Option<Record> {
        self.book.read().await.find(name).cloned()
    }

    async fn delete_contact(&self, name: &str) -> bool {
        let removed = self.book.write().await.delete(name).is_some();
        if removed {
            tracing::info!(name = %name, "Contact deleted");
        }
        removed
    }

    async fn list_contacts(&self) -> Vec<Record> {
        self.book.read().await.records().cloned().collect()
    }

    async fn birthdays_per_week(&self, today: Option<NaiveDate>) -> WeeklyBirthdays {
        let today = self.resolve_today(today);
        self.book.read().await.get_birthdays_per_week(today)
    }
}

//! Address Book - an in-memory contact directory with weekly birthday scheduling.
//!
//! Contacts hold validated phone numbers and an optional birthday. The book
//! answers "whose birthday falls in the next seven days, and on which weekday
//! should it be celebrated?"
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, birthday)
//! - **models**: The contact record and the address book collection
//! - **birthdays**: Weekly birthday bucketing
//! - **services**: Lock-guarded async boundary over a shared address book
//! - **server**: MCP protocol front end
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod birthdays;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod server;
pub mod services;

pub use birthdays::{BirthdayAnomaly, BirthdayScheduler, WeeklyBirthdays};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{ConfigError, DirectoryError, DirectoryResult};
pub use models::{AddressBook, Record};
pub use server::AddressBookMcpServer;
pub use services::{DirectoryService, DirectoryServiceImpl, NewContactParams};

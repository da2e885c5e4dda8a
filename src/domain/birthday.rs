//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepted text formats, tried in order.
const BIRTHDAY_FORMATS: [&str; 2] = ["%d.%m.%Y", "%Y-%m-%d"];

/// A calendar date of birth. Any valid date is accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a birthday from `DD.MM.YYYY` or `YYYY-MM-DD` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text matches neither
    /// format or names a date that does not exist (e.g. `31.02.1990`).
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        BIRTHDAY_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidBirthday(text.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month and day placed in `year`.
    ///
    /// February 29 falls back to February 28 when `year` is not a leap year.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        &self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}

//! The weekly bucketing algorithm.

use super::weekday::{weekday_name, WEEK};
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Length of the half-open window `[today, today + WINDOW_DAYS)`.
pub const WINDOW_DAYS: i64 = 7;

/// A non-fatal inconsistency noticed while scheduling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayAnomaly {
    /// A record was stored under an empty name key. It is still scheduled.
    EmptyName { birthday: NaiveDate },
}

/// Names per weekday for one run of the scheduler.
///
/// Names within a day keep the order the records were visited in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyBirthdays {
    buckets: [Vec<String>; 7],
    anomalies: Vec<BirthdayAnomaly>,
}

impl WeeklyBirthdays {
    /// Names bucketed under `day`. Empty if nobody is.
    pub fn get(&self, day: Weekday) -> &[String] {
        &self.buckets[day.num_days_from_monday() as usize]
    }

    /// Non-empty buckets, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> + '_ {
        WEEK.into_iter()
            .map(|day| (day, self.get(day)))
            .filter(|(_, names)| !names.is_empty())
    }

    /// Whether `name` appears in any bucket.
    pub fn contains(&self, name: &str) -> bool {
        self.buckets.iter().flatten().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Total number of scheduled names.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn anomalies(&self) -> &[BirthdayAnomaly] {
        &self.anomalies
    }

    fn push(&mut self, day: Weekday, name: &str) {
        self.buckets[day.num_days_from_monday() as usize].push(name.to_string());
    }
}

// Serializes as `{"Monday": [...], "Tuesday": [...]}` with only the non-empty days.
impl Serialize for WeeklyBirthdays {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        for (day, names) in self.iter() {
            map.serialize_entry(weekday_name(day), names)?;
        }
        map.end()
    }
}

/// Buckets upcoming birthdays relative to a fixed "today".
///
/// For each record with a birthday:
///
/// 1. The birthday's month and day are placed in today's year.
/// 2. It is a candidate only if it falls in `[today, today + 7 days)`.
/// 3. Monday to Friday birthdays go under their own weekday.
/// 4. Saturday and Sunday birthdays go under Monday, except when today is
///    itself a Monday: then they are not bucketed at all.
#[derive(Debug, Clone, Copy)]
pub struct BirthdayScheduler {
    today: NaiveDate,
}

impl BirthdayScheduler {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// First day after the window, saturating at `NaiveDate::MAX`.
    pub fn window_end(&self) -> NaiveDate {
        self.today
            .checked_add_signed(Duration::days(WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Run the algorithm over `(name key, record)` pairs in their given order.
    pub fn schedule<'a, I>(&self, entries: I) -> WeeklyBirthdays
    where
        I: IntoIterator<Item = (&'a str, &'a Record)>,
    {
        let mut result = WeeklyBirthdays::default();

        for (name, record) in entries {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            if name.is_empty() {
                tracing::warn!(birthday = %birthday, "Record with empty name in address book");
                result.anomalies.push(BirthdayAnomaly::EmptyName {
                    birthday: birthday.date(),
                });
            }

            let this_year = birthday.in_year(self.today.year());
            if this_year.day() != birthday.date().day() {
                tracing::debug!(name = %name, date = %this_year, "Leap day birthday moved");
            }

            if let Some(day) = self.resolve_weekday(this_year) {
                result.push(day, name);
            }
        }

        tracing::debug!(
            today = %self.today,
            scheduled = result.len(),
            "Weekly birthdays computed"
        );
        result
    }

    /// The bucket a birthday on `date` lands in, or `None` if it is skipped.
    pub fn resolve_weekday(&self, date: NaiveDate) -> Option<Weekday> {
        let offset = (date - self.today).num_days();
        if !(0..WINDOW_DAYS).contains(&offset) {
            return None;
        }

        match date.weekday() {
            Weekday::Sat | Weekday::Sun if self.today.weekday() == Weekday::Mon => None,
            Weekday::Sat | Weekday::Sun => Some(Weekday::Mon),
            day => Some(day),
        }
    }
}

//! Weekly birthday scheduling.
//!
//! Buckets the birthdays falling in the seven days starting at "today" by
//! the weekday they should be celebrated on.

mod scheduler;
mod weekday;

pub use scheduler::{BirthdayAnomaly, BirthdayScheduler, WeeklyBirthdays, WINDOW_DAYS};
pub use weekday::{weekday_name, WEEK};

//! Weekly birthday bucketing through the AddressBook.

mod e2e;
use e2e::{fixtures::*, *};

use address_book::{AddressBook, BirthdayScheduler};
use chrono::{Datelike, Weekday};

fn book_of(records: Vec<address_book::Record>) -> AddressBook {
    let mut book = AddressBook::new();
    for record in records {
        book.add_record(record);
    }
    book
}

#[test]
fn test_weekday_birthday_from_non_monday() {
    let today = wednesday();
    // Next Tuesday, inside the seven-day window.
    let book = book_of(vec![sample_birthday("Bob", ymd(1980, 1, 16))]);

    let week = book.get_birthdays_per_week(today);
    assert_eq!(week.get(Weekday::Tue), ["Bob".to_string()]);
    assert_eq!(
        serde_json::to_value(&week).unwrap(),
        serde_json::json!({ "Tuesday": ["Bob"] })
    );
}

#[test]
fn test_sunday_birthday_seen_on_saturday_moves_to_monday() {
    let today = saturday();
    let book = book_of(vec![sample_birthday("Lily", ymd(1995, 1, 7))]);

    let week = book.get_birthdays_per_week(today);
    assert_eq!(
        serde_json::to_value(&week).unwrap(),
        serde_json::json!({ "Monday": ["Lily"] })
    );
}

#[test]
fn test_saturday_birthday_seen_on_monday_is_dropped() {
    let today = monday();
    let book = book_of(vec![sample_birthday("Sam", ymd(1975, 1, 13))]);

    let week = book.get_birthdays_per_week(today);
    assert!(!week.contains("Sam"));
    assert!(week.is_empty());
}

#[test]
fn test_mixed_week_keeps_book_order() {
    let today = saturday();
    let book = book_of(vec![
        sample_birthday("Bill", ymd(1955, 1, 8)),
        sample_record("NoBirthday", &["1234567890"]),
        sample_birthday("Lily Gates", ymd(1990, 1, 6)),
        sample_birthday("Lily Evans", ymd(1991, 1, 7)),
        sample_birthday("Geremy", ymd(1960, 1, 9)),
        sample_birthday("Karter", ymd(1970, 1, 12)),
        sample_birthday("Late", ymd(1970, 1, 13)),
    ]);

    let week = book.get_birthdays_per_week(today);
    assert_eq!(
        serde_json::to_value(&week).unwrap(),
        serde_json::json!({
            "Monday": ["Bill", "Lily Gates", "Lily Evans"],
            "Tuesday": ["Geremy"],
            "Friday": ["Karter"],
        })
    );
    assert!(week.anomalies().is_empty());
}

#[test]
fn test_every_start_day_of_a_week() {
    // One birthday on each day from 2024-01-08 (Mon) through 2024-01-21 (Sun).
    let records = (8..=21)
        .map(|d| sample_birthday(&format!("p{}", d), ymd(1990, 1, d)))
        .collect();
    let book = book_of(records);

    for start in 8..=14 {
        let today = ymd(2024, 1, start);
        let week = book.get_birthdays_per_week(today);
        let scheduler = BirthdayScheduler::new(today);

        for d in 8..=21 {
            let date = ymd(2024, 1, d);
            let name = format!("p{}", d);
            let in_window = date >= today && date < scheduler.window_end();
            let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
            let dropped = today.weekday() == Weekday::Mon && weekend;

            assert_eq!(
                week.contains(&name),
                in_window && !dropped,
                "today={} birthday={}",
                today,
                date
            );
            if in_window && weekend && !dropped {
                assert!(week.get(Weekday::Mon).contains(&name));
            }
        }
    }
}

#[test]
fn test_result_tracks_later_edits() {
    let today = wednesday();
    let mut book = book_of(vec![sample_record("Ann", &[])]);
    assert!(book.get_birthdays_per_week(today).is_empty());

    book.find_mut("Ann").unwrap().add_birthday(ymd(1990, 1, 12));
    assert_eq!(
        book.get_birthdays_per_week(today).get(Weekday::Fri),
        ["Ann".to_string()]
    );

    book.delete("Ann");
    assert!(book.get_birthdays_per_week(today).is_empty());
}

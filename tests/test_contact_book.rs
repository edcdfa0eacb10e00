//! Integration tests for contact records and the contact book.

use chrono::{Datelike, NaiveDate, Weekday};
use daybook::{AddStatus, Contact, ContactBook};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_add_then_find_renders_same_name() {
    let mut book = ContactBook::new();
    book.add(Contact::new("Alice").unwrap());

    let found = book.find("Alice").expect("contact should be findable");
    assert_eq!(found.name().as_str(), "Alice");
    assert!(found.to_string().starts_with("Contact name: Alice"));
}

#[test]
fn test_delete_absent_name_changes_nothing() {
    let mut book = ContactBook::new();
    book.add(Contact::new("Alice").unwrap());

    assert!(book.delete("Bob").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_duplicate_add_merges_instead_of_overwriting() {
    let mut book = ContactBook::new();
    let mut first = Contact::new("Alice").unwrap();
    first.add_phone("1111111111").unwrap();
    first.set_address("12 Main St").unwrap();
    assert_eq!(book.add(first), AddStatus::Created);

    let mut second = Contact::new("Alice").unwrap();
    second.add_phone("2222222222").unwrap();
    second.set_address("99 Other Rd").unwrap();
    assert_eq!(book.add(second), AddStatus::Merged);

    let merged = book.find("Alice").unwrap();
    let phones: Vec<&str> = merged.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["1111111111", "2222222222"]);
    // the populated address survives the merge
    assert_eq!(merged.address().unwrap().as_str(), "12 Main St");
}

#[test]
fn test_saturday_birthday_reports_monday_congratulation() {
    let mut book = ContactBook::new();
    let mut alice = Contact::new("Alice").unwrap();
    alice.set_birthday("13.01.1990").unwrap();
    book.add(alice);

    // 2024-01-13 is a Saturday
    let today = date(2024, 1, 10);
    let upcoming = book.upcoming_birthdays_from(today, 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].occurs_on.weekday(), Weekday::Sat);
    assert_eq!(upcoming[0].congratulation, date(2024, 1, 15));
    assert_eq!(upcoming[0].congratulation.weekday(), Weekday::Mon);
}

#[test]
fn test_birthday_eight_days_out_is_excluded() {
    let mut book = ContactBook::new();
    let mut alice = Contact::new("Alice").unwrap();
    alice.set_birthday("18.01.1990").unwrap();
    book.add(alice);

    assert!(book
        .upcoming_birthdays_from(date(2024, 1, 10), 7)
        .is_empty());
}

#[test]
fn test_window_boundaries_are_inclusive() {
    let mut book = ContactBook::new();
    let mut today_contact = Contact::new("Today").unwrap();
    today_contact.set_birthday("10.01.1990").unwrap();
    book.add(today_contact);
    let mut edge_contact = Contact::new("Edge").unwrap();
    edge_contact.set_birthday("17.01.1990").unwrap();
    book.add(edge_contact);

    let upcoming = book.upcoming_birthdays_from(date(2024, 1, 10), 7);
    assert_eq!(upcoming.len(), 2);
}

#[test]
fn test_edit_phone_is_atomic() {
    let mut contact = Contact::new("Alice").unwrap();
    contact.add_phone("1111111111").unwrap();

    // A malformed replacement must not disturb the existing list.
    assert!(contact.edit_phone("1111111111", "oops").is_err());
    assert_eq!(contact.phones()[0].as_str(), "1111111111");

    // An absent old value is an error, not a quiet skip.
    assert!(contact.edit_phone("2222222222", "3333333333").is_err());

    contact.edit_phone("1111111111", "3333333333").unwrap();
    assert_eq!(contact.phones()[0].as_str(), "3333333333");
}

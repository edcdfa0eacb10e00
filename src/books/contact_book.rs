//! Contact book: the keyed collection of contact records.

use crate::models::Contact;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Outcome of [`ContactBook::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStatus {
    /// No contact of that name existed; the record was inserted.
    Created,
    /// A contact of that name already existed; the incoming record was
    /// merged into it.
    Merged,
}

/// One row of the upcoming-birthday projection.
///
/// `occurs_on` is the actual calendar occurrence of the birthday inside
/// the queried window; `congratulation` is the date to greet on, shifted
/// off weekends (Saturday moves to Monday, Sunday to Monday).
#[derive(Debug, Clone, Copy)]
pub struct UpcomingBirthday<'a> {
    pub contact: &'a Contact,
    pub occurs_on: NaiveDate,
    pub congratulation: NaiveDate,
}

/// A collection of contacts keyed by name.
///
/// Keys are unique; the stored record's name always equals its map key.
/// The map itself is never handed out mutably, so every mutation goes
/// through an operation that preserves that invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    records: BTreeMap<String, Contact>,
}

impl ContactBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact, merging when the name is already taken.
    ///
    /// A new name inserts the record and returns [`AddStatus::Created`].
    /// An existing name keeps the stored record, appends the incoming
    /// phones, fills any unset optional field from the incoming record,
    /// and returns [`AddStatus::Merged`]. Nothing is ever silently
    /// overwritten.
    pub fn add(&mut self, contact: Contact) -> AddStatus {
        let key = contact.name().as_str().to_string();
        match self.records.get_mut(&key) {
            Some(existing) => {
                existing.merge(contact);
                AddStatus::Merged
            }
            None => {
                self.records.insert(key, contact);
                AddStatus::Created
            }
        }
    }

    /// Look up a contact by exact name.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.records.get(name)
    }

    /// Look up a contact by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.records.get_mut(name)
    }

    /// Remove a contact, returning it. Absent names are a quiet `None`,
    /// not an error.
    pub fn delete(&mut self, name: &str) -> Option<Contact> {
        self.records.remove(name)
    }

    /// All contacts in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.records.values()
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday falls within `within_days` of today.
    ///
    /// See [`ContactBook::upcoming_birthdays_from`] for the exact rules;
    /// this variant anchors the window at the current local date.
    pub fn upcoming_birthdays(&self, within_days: u64) -> Vec<UpcomingBirthday<'_>> {
        self.upcoming_birthdays_from(Local::now().date_naive(), within_days)
    }

    /// Contacts whose next birthday falls within `within_days` of `today`.
    ///
    /// For every contact with a birthday set, this year's occurrence of
    /// its month and day is computed; an occurrence already behind `today`
    /// rolls forward one year. A contact qualifies when the occurrence
    /// lies in `[today, today + within_days]` inclusive. The reported
    /// congratulation date shifts a Saturday occurrence forward two days
    /// and a Sunday occurrence forward one day; the shift never affects
    /// qualification. Results are ordered by occurrence date, ties by
    /// name.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        within_days: u64,
    ) -> Vec<UpcomingBirthday<'_>> {
        let window_end = today
            .checked_add_days(Days::new(within_days))
            .unwrap_or(NaiveDate::MAX);

        let mut upcoming: Vec<UpcomingBirthday<'_>> = self
            .records
            .values()
            .filter_map(|contact| {
                let birthday = contact.birthday()?.date();
                let mut occurs_on = occurrence_in_year(birthday, today.year());
                if occurs_on < today {
                    occurs_on = occurrence_in_year(birthday, today.year() + 1);
                }
                if occurs_on > window_end {
                    return None;
                }
                Some(UpcomingBirthday {
                    contact,
                    occurs_on,
                    congratulation: congratulation_date(occurs_on),
                })
            })
            .collect();

        upcoming.sort_by(|a, b| {
            (a.occurs_on, a.contact.name().as_str()).cmp(&(b.occurs_on, b.contact.name().as_str()))
        });
        upcoming
    }
}

/// The calendar occurrence of `birthday` in `year`.
///
/// February 29th maps to March 1st in non-leap years.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).unwrap_or_else(|| {
        // SAFETY: only Feb 29 lacks an occurrence, and March 1st always exists
        NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1st exists in every year")
    })
}

/// Shift a weekend occurrence to the following Monday.
fn congratulation_date(occurs_on: NaiveDate) -> NaiveDate {
    let shift = match occurs_on.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    occurs_on
        .checked_add_days(Days::new(shift))
        .unwrap_or(occurs_on)
}

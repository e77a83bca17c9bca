//! Upcoming-birthday scheduling.
//!
//! Computes which contacts should be congratulated within the next
//! seven days, moving weekend dates to the following Monday. Near the
//! end of December the window is allowed to cross into the next year.

use crate::book::AddressBook;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// Length of the look-ahead window, in days.
const HORIZON_DAYS: i64 = 7;

/// One entry in the congratulation schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Congratulation {
    /// The contact's name
    pub name: String,

    /// The date the birthday should be acknowledged, after any
    /// weekend shift
    pub congratulation_date: NaiveDate,
}

/// Collect the contacts whose birthdays fall within the next seven
/// days of `today`, each with its congratulation date.
///
/// Contacts without a birthday are skipped. A birthday anniversary
/// landing on Saturday or Sunday is congratulated on the following
/// Monday. When `today` is within the last six days of December the
/// next year's anniversaries are considered too; earlier in the year
/// the window never crosses the year boundary, so a January birthday
/// does not appear while `today` is still in the previous December's
/// run-up. Each contact appears at most once, in the book's iteration
/// order.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> Vec<Congratulation> {
    let mut celebrators = Vec::new();

    for record in book.iter() {
        let Some(birthday) = record.birthday() else {
            continue;
        };

        // Anniversary in the current year.
        let this_year = birthday.in_year(today.year());
        if this_year >= today {
            if (this_year - today).num_days() <= HORIZON_DAYS {
                celebrators.push(Congratulation {
                    name: record.name().as_str().to_owned(),
                    congratulation_date: shift_off_weekend(this_year),
                });
            }
            continue;
        }

        // The anniversary already passed; only the last six days of
        // December may look across the year boundary.
        if today.month() == 12 && today.day() > 25 {
            let next_year = birthday.in_year(today.year() + 1);
            if (next_year - today).num_days() <= HORIZON_DAYS {
                celebrators.push(Congratulation {
                    name: record.name().as_str().to_owned(),
                    congratulation_date: shift_off_weekend(next_year),
                });
            }
        }
    }

    celebrators
}

/// Saturday moves two days forward, Sunday one; both land on Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

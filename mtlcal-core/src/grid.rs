//! Month grid geometry.
//!
//! A month renders as a 7-column grid, week starting on Sunday. The grid is
//! the weekday offset of the 1st as leading blanks, followed by one cell per
//! day. It is not padded out to a multiple of 7; rendering decides how to
//! close the last row.

use chrono::{Datelike, NaiveDate};

/// Month names, January first. The deployment is French-locale.
pub const MONTHS: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// Column headers, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"];

/// One grid position: empty padding before the 1st, or a day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day(u32),
}

impl CalendarCell {
    /// The day number, if this cell carries one.
    pub fn day(self) -> Option<u32> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day(n) => Some(n),
        }
    }
}

/// Build the ordered cell sequence for a month.
///
/// `month` is zero-based (0 = January). Length is always
/// `first_weekday + days_in_month`.
pub fn month_grid(year: i32, month: u32) -> Vec<CalendarCell> {
    let mut cells = Vec::with_capacity(42);

    for _ in 0..first_weekday(year, month) {
        cells.push(CalendarCell::Blank);
    }
    for day in 1..=days_in_month(year, month) {
        cells.push(CalendarCell::Day(day));
    }

    cells
}

/// Weekday column of the 1st of the month, Sunday = 0 .. Saturday = 6.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    first_of_month(year, month).weekday().num_days_from_sunday()
}

/// Day count of the month under Gregorian leap-year rules.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = first_of_month(year, month);
    let next = if month == 11 {
        first_of_month(year + 1, 0)
    } else {
        first_of_month(year, month + 1)
    };

    next.signed_duration_since(first).num_days() as u32
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // An out-of-range month is a caller bug, not a handled error.
    assert!(month < 12, "month index out of range: {month}");
    NaiveDate::from_ymd_opt(year, month + 1, 1).expect("first of month is a valid date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_offset_plus_day_count() {
        for year in [1999, 2024, 2025, 2100] {
            for month in 0..12 {
                let cells = month_grid(year, month);
                assert_eq!(
                    cells.len() as u32,
                    first_weekday(year, month) + days_in_month(year, month),
                    "{year}-{month}"
                );
            }
        }
    }

    #[test]
    fn first_day_lands_in_its_weekday_column() {
        for year in [2023, 2024, 2025] {
            for month in 0..12 {
                let cells = month_grid(year, month);
                let offset = first_weekday(year, month) as usize;
                assert_eq!(cells[offset], CalendarCell::Day(1), "{year}-{month}");
            }
        }
    }

    #[test]
    fn february_follows_leap_years() {
        let days = |cells: Vec<CalendarCell>| cells.iter().filter(|c| c.day().is_some()).count();

        assert_eq!(days(month_grid(2025, 1)), 28);
        assert_eq!(days(month_grid(2024, 1)), 29);
        // Century rule: 2100 is not a leap year
        assert_eq!(days(month_grid(2100, 1)), 28);
    }

    #[test]
    fn march_2025_starts_on_a_saturday() {
        // 2025-03-01 is a Saturday: six leading blanks, then 1..=31.
        assert_eq!(first_weekday(2025, 2), 6);

        let cells = month_grid(2025, 2);
        assert_eq!(cells.len(), 6 + 31);
        assert!(cells[..6].iter().all(|c| *c == CalendarCell::Blank));
        assert_eq!(cells[6], CalendarCell::Day(1));
        assert_eq!(cells[36], CalendarCell::Day(31));
    }

    #[test]
    fn december_rolls_into_next_year() {
        assert_eq!(days_in_month(2025, 11), 31);
    }

    #[test]
    #[should_panic(expected = "month index out of range")]
    fn out_of_range_month_is_a_contract_violation() {
        month_grid(2025, 12);
    }
}

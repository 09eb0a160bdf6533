//! Associating events with calendar days.
//!
//! Lookup is first-match-wins over the store-returned order: when two events
//! share a date, the one that came back first is the day's marker. The store
//! makes no ordering promise, so which record wins a tie can differ between
//! loads; within one loaded list the result is stable.

use std::collections::HashMap;

use chrono::Datelike;

use crate::event::Event;

/// First event in `events` falling on `(year, month, day)`.
///
/// `month` is zero-based. `day` is `None` for blank grid cells, which never
/// match anything.
pub fn event_for_day(
    events: &[Event],
    year: i32,
    month: u32,
    day: Option<u32>,
) -> Option<&Event> {
    let day = day?;
    events.iter().find(|e| occurs_on(e, year, month, day))
}

fn occurs_on(event: &Event, year: i32, month: u32, day: u32) -> bool {
    event.date.year() == year && event.date.month0() == month && event.date.day() == day
}

/// Day-number lookup precomputed for one displayed month.
///
/// Rendering a month probes every cell; this avoids rescanning the full list
/// per cell. Agrees with [`event_for_day`] on every day, including the
/// first-match tie-break.
pub struct MonthIndex<'a> {
    by_day: HashMap<u32, &'a Event>,
}

impl<'a> MonthIndex<'a> {
    pub fn build(events: &'a [Event], year: i32, month: u32) -> Self {
        let mut by_day = HashMap::new();

        for event in events {
            if event.date.year() == year && event.date.month0() == month {
                // entry() keeps the earliest record for a day
                by_day.entry(event.date.day()).or_insert(event);
            }
        }

        MonthIndex { by_day }
    }

    pub fn get(&self, day: Option<u32>) -> Option<&'a Event> {
        self.by_day.get(&day?).copied()
    }

    /// Marked days in ascending order, with their events.
    pub fn marked_days(&self) -> Vec<(u32, &'a Event)> {
        let mut days: Vec<_> = self.by_day.iter().map(|(d, e)| (*d, *e)).collect();
        days.sort_by_key(|(d, _)| *d);
        days
    }
}

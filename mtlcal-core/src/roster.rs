//! Pure updates to the in-memory event list.
//!
//! The loaded list is an owned value: writes to the store succeed first,
//! then the matching local update is applied here. Nothing re-fetches.

use crate::event::Event;

/// Append a store-returned record (carrying its assigned id).
pub fn apply_insert(mut events: Vec<Event>, record: Event) -> Vec<Event> {
    events.push(record);
    events
}

/// Remove the record with the deleted id, if present.
pub fn apply_delete(mut events: Vec<Event>, id: i64) -> Vec<Event> {
    events.retain(|e| e.id != id);
    events
}

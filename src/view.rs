//! Calendar view state and optimistic updates.
//!
//! Holds the selected month, the loaded event list, and which overlay is
//! open. Writes go through the injected store first; on success the
//! matching pure list update is applied locally, never a re-fetch. On
//! failure the list is untouched and the initiating overlay stays open;
//! the error is a diagnostic only.

use mtlcal_core::error::StoreResult;
use mtlcal_core::event::{Event, NewEvent};
use mtlcal_core::grid::{self, CalendarCell};
use mtlcal_core::index::{self, MonthIndex};
use mtlcal_core::roster;

use crate::store::EventStore;

/// The year this deployment displays. Not user-selectable.
pub const AGENDA_YEAR: i32 = 2025;

/// Month shown before any selection (March).
const DEFAULT_MONTH: u32 = 2;

/// Which overlay is open on top of the calendar.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    None,
    /// The add-event form.
    Add,
    /// The delete-event list.
    Delete,
    /// Detail for the event behind a clicked day marker.
    Detail(Event),
}

pub struct CalendarView<S> {
    store: S,
    pub year: i32,
    month: u32,
    events: Vec<Event>,
    modal: Modal,
}

impl<S: EventStore> CalendarView<S> {
    pub fn new(store: S) -> Self {
        CalendarView {
            store,
            year: AGENDA_YEAR,
            month: DEFAULT_MONTH,
            events: Vec::new(),
            modal: Modal::None,
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Select a month by zero-based index.
    pub fn select_month(&mut self, month: u32) {
        assert!(month < 12, "month index out of range: {month}");
        self.month = month;
    }

    pub fn open_add(&mut self) {
        self.modal = Modal::Add;
    }

    pub fn open_delete(&mut self) {
        self.modal = Modal::Delete;
    }

    pub fn open_detail(&mut self, event: Event) {
        self.modal = Modal::Detail(event);
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }

    /// Load the event list from the store.
    ///
    /// On failure the current list is kept as it was (empty or stale) and
    /// the error is returned for the caller to log.
    pub async fn load(&mut self) -> StoreResult<()> {
        self.events = self.store.list_all().await?;
        Ok(())
    }

    /// Submit the add form.
    ///
    /// The store assigns the id; on success its record is appended to the
    /// local list and the form closes. On failure the form stays open and
    /// the list is unchanged. The result is applied even if the form was
    /// closed while the request was in flight.
    pub async fn submit_add(&mut self, draft: NewEvent) -> StoreResult<Event> {
        let created = self.store.insert(&draft).await?;

        let record = created.clone();
        self.events = roster::apply_insert(std::mem::take(&mut self.events), created);
        self.modal = Modal::None;
        Ok(record)
    }

    /// Confirm a deletion from the delete list.
    ///
    /// Same policy as [`submit_add`](Self::submit_add): store first, local
    /// list second, overlay closes only on success.
    pub async fn confirm_delete(&mut self, id: i64) -> StoreResult<()> {
        self.store.delete_by_id(id).await?;

        self.events = roster::apply_delete(std::mem::take(&mut self.events), id);
        self.modal = Modal::None;
        Ok(())
    }

    /// Grid cells for the selected month.
    pub fn cells(&self) -> Vec<CalendarCell> {
        grid::month_grid(self.year, self.month)
    }

    /// Precomputed day -> marker lookup for the selected month.
    pub fn month_index(&self) -> MonthIndex<'_> {
        MonthIndex::build(&self.events, self.year, self.month)
    }

    /// Marker for one cell of the selected month.
    pub fn event_for_day(&self, day: Option<u32>) -> Option<&Event> {
        index::event_for_day(&self.events, self.year, self.month, day)
    }
}

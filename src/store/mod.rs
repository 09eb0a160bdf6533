//! Remote event store access.
//!
//! `EventStore` is the seam between the view and the hosted backend: the
//! view is generic over it, so tests substitute an in-memory fake and the
//! binary injects the REST client. No module-level connection singleton.

mod rest;

pub use rest::RestStore;

use mtlcal_core::error::StoreResult;
use mtlcal_core::event::{Event, NewEvent};

/// A remote collection of event records.
///
/// Three operations, no update: the UI only ever lists, inserts, and
/// deletes. Every call is one round trip; nothing here retries.
pub trait EventStore {
    /// Fetch every record in the collection.
    fn list_all(&self) -> impl Future<Output = StoreResult<Vec<Event>>>;

    /// Create a record. The returned record carries the store-assigned id.
    fn insert(&self, draft: &NewEvent) -> impl Future<Output = StoreResult<Event>>;

    /// Delete the record with this id. No payload on success.
    fn delete_by_id(&self, id: i64) -> impl Future<Output = StoreResult<()>>;
}

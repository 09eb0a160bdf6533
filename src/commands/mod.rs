pub mod add;
pub mod delete;
pub mod events;
pub mod info;
pub mod show;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config;
use crate::store::RestStore;
use crate::tui;
use crate::view::CalendarView;

/// Build a view on the configured store and load the event list.
///
/// A failed load is a diagnostic, not an exit: the view stays usable with
/// an empty (or stale) list, per the store error policy.
pub async fn load_view() -> Result<CalendarView<RestStore>> {
    let cfg = config::load_config()?;
    let store = RestStore::new(&cfg.store);
    let mut view = CalendarView::new(store);

    let spinner = tui::spinner("Loading events");
    let result = view.load().await;
    spinner.finish_and_clear();

    if let Err(err) = result {
        eprintln!("{}", format!("Warning: {err}").red());
    }

    Ok(view)
}

/// Turn a user-facing month number (1-12) into the zero-based index the
/// view works with.
pub fn parse_month_arg(month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        anyhow::bail!("Month must be between 1 and 12, got {}", month);
    }
    Ok(month - 1)
}

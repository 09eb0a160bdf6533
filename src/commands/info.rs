use anyhow::Result;

use mtlcal_core::grid::MONTHS;

use crate::commands::{load_view, parse_month_arg};
use crate::render;
use crate::view::Modal;

/// Show the detail overlay for the event behind a day's marker.
pub async fn run(day: u32, month: Option<u32>) -> Result<()> {
    let mut view = load_view().await?;

    if let Some(m) = month {
        view.select_month(parse_month_arg(m)?);
    }

    let event = view.event_for_day(Some(day)).cloned().ok_or_else(|| {
        anyhow::anyhow!(
            "No event on {} {} {}",
            day,
            MONTHS[view.month() as usize],
            view.year
        )
    })?;

    view.open_detail(event);

    if let Modal::Detail(event) = view.modal() {
        println!("{}", render::event_detail(event));
    }

    Ok(())
}

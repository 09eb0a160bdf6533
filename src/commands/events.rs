use anyhow::Result;
use owo_colors::OwoColorize;

use crate::commands::load_view;
use crate::render;

/// List every event, one `name - date` line, in store-return order.
pub async fn run() -> Result<()> {
    let view = load_view().await?;

    if view.events().is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in view.events() {
        println!("  {} {}", format!("{:>4}", event.id).dimmed(), render::event_line(event));
    }

    Ok(())
}

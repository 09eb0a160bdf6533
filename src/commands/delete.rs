use anyhow::Result;
use dialoguer::Select;
use owo_colors::OwoColorize;

use crate::commands::load_view;
use crate::render;
use crate::tui;

/// Delete an event by id, or pick one from the event list when no id is
/// given (the delete-overlay flow).
pub async fn run(id: Option<i64>) -> Result<()> {
    let mut view = load_view().await?;
    view.open_delete();

    let id = match id {
        Some(id) => id,
        None => {
            if view.events().is_empty() {
                println!("{}", "No events to delete".dimmed());
                return Ok(());
            }

            let items: Vec<String> = view.events().iter().map(render::event_line).collect();
            let selection = Select::new()
                .with_prompt("  Supprimer un événement")
                .items(&items)
                .default(0)
                .interact()?;
            view.events()[selection].id
        }
    };

    let spinner = tui::spinner("Deleting event");
    let result = view.confirm_delete(id).await;
    spinner.finish_and_clear();

    match result {
        Ok(()) => println!("{}", format!("  Deleted event {}", id).green()),
        // Abandoned, not retried. The list overlay stays open in the view.
        Err(err) => eprintln!("  {}", err.to_string().red()),
    }

    Ok(())
}

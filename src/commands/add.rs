use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;
use owo_colors::OwoColorize;

use mtlcal_core::event::NewEvent;

use crate::commands::load_view;
use crate::tui;

/// Add an event. Fields missing from the command line are prompted for,
/// mirroring the add form: date, name, description, promo percentage,
/// category, optional link.
pub async fn run(
    date: Option<String>,
    name: Option<String>,
    description: Option<String>,
    promo: Option<f64>,
    category: Option<String>,
    link: Option<String>,
) -> Result<()> {
    let interactive = date.is_none() || name.is_none();

    // --- Date ---
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => prompt_with_retry("  Date (AAAA-MM-JJ)", parse_date)?,
    };

    // --- Name ---
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Nom de l'événement")
            .interact_text()?,
    };

    // --- Description ---
    let description = match description {
        Some(d) => d,
        None if interactive => Input::<String>::new()
            .with_prompt("  Description")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    // --- Promo ---
    let promo = match promo {
        Some(p) => Some(p),
        None if interactive => prompt_promo()?,
        None => None,
    };

    // --- Category ---
    let category = match category {
        Some(c) => c,
        None if interactive => Input::<String>::new()
            .with_prompt("  Catégorie")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    // --- Link ---
    let link = match link {
        Some(l) if !l.is_empty() => Some(l),
        Some(_) => None,
        None if interactive => {
            let input: String = Input::new()
                .with_prompt("  Lien (facultatif)")
                .default(String::new())
                .show_default(false)
                .interact_text()?;
            if input.is_empty() { None } else { Some(input) }
        }
        None => None,
    };

    let draft = NewEvent {
        name,
        date,
        description,
        promo,
        category,
        link,
    };

    let mut view = load_view().await?;
    view.open_add();

    let spinner = tui::spinner("Saving event");
    let result = view.submit_add(draft).await;
    spinner.finish_and_clear();

    match result {
        Ok(record) => {
            if interactive {
                println!();
            }
            println!(
                "{}",
                format!("  Created: {} (id {})", record.name, record.id).green()
            );
        }
        // Abandoned, not retried. The form state stays open in the view.
        Err(err) => eprintln!("  {}", err.to_string().red()),
    }

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt for a promo percentage; empty input skips it.
fn prompt_promo() -> Result<Option<f64>> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Promo (%)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        match input.trim().parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => {
                eprintln!("  {}", format!("Not a number: \"{}\"", input.trim()).red());
            }
        }
    }
}

/// The form's date field is a plain calendar date.
fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\" (expected AAAA-MM-JJ)", input))
}

//! Terminal rendering of the month grid and event lines.

use chrono::Datelike;
use owo_colors::OwoColorize;

use mtlcal_core::event::Event;
use mtlcal_core::grid::{CalendarCell, MONTHS, WEEKDAYS};
use mtlcal_core::index::MonthIndex;

/// Render a month: title, weekday header, day rows, then one legend line
/// per marked day. Days carrying an event are highlighted and starred.
pub fn render_month(year: i32, month: u32, cells: &[CalendarCell], index: &MonthIndex) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{} {}", MONTHS[month as usize].bold(), year));
    lines.push(
        WEEKDAYS
            .iter()
            .map(|d| format!("{d:>4}"))
            .collect::<String>()
            .dimmed()
            .to_string(),
    );

    for week in cells.chunks(7) {
        let row: String = week.iter().map(|cell| render_cell(*cell, index)).collect();
        lines.push(row);
    }

    for (day, event) in index.marked_days() {
        lines.push(format!(
            "  {} {}",
            format!("{day:>2}*").magenta(),
            event.name
        ));
    }

    lines.join("\n")
}

fn render_cell(cell: CalendarCell, index: &MonthIndex) -> String {
    match cell.day() {
        None => "    ".to_string(),
        Some(day) if index.get(Some(day)).is_some() => {
            format!("{}", format!("{day:>3}*").magenta().bold())
        }
        Some(day) => format!("{day:>3} "),
    }
}

/// One line per event, as shown in the delete list: "name - date".
pub fn event_line(event: &Event) -> String {
    format!("{} - {}", event.name, format_date(event))
}

/// Full detail block for one event, the detail-overlay fields.
pub fn event_detail(event: &Event) -> String {
    let mut lines = vec![
        event.name.bold().to_string(),
        format!("{} {}", "Date:".dimmed(), format_date(event)),
        format!("{} {}", "Description:".dimmed(), event.description),
        format!("{} {}", "Catégorie:".dimmed(), event.category),
    ];

    if let Some(promo) = event.promo {
        lines.push(format!("{} {}%", "Promo:".dimmed(), promo));
    }
    if let Some(link) = &event.link {
        lines.push(format!("{} {}", "Lien:".dimmed(), link.underline()));
    }

    lines.join("\n")
}

/// Dates display as DD/MM/YYYY, the deployment's locale convention.
fn format_date(event: &Event) -> String {
    format!(
        "{:02}/{:02}/{}",
        event.date.day(),
        event.date.month(),
        event.date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mtlcal_core::grid;

    fn event(id: i64, date: &str, name: &str) -> Event {
        Event {
            id,
            name: name.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description: String::new(),
            promo: None,
            category: String::new(),
            link: None,
        }
    }

    fn render_march(events: &[Event]) -> String {
        let cells = grid::month_grid(2025, 2);
        let index = MonthIndex::build(events, 2025, 2);
        render_month(2025, 2, &cells, &index)
    }

    #[test]
    fn march_2025_renders_six_rows_of_days() {
        let out = render_march(&[]);

        // title + header + ceil(37 / 7) week rows, no legend
        assert_eq!(out.lines().count(), 2 + 6);
        assert!(out.contains("Mars"));
    }

    #[test]
    fn legend_lists_one_line_per_marked_day() {
        let events = vec![
            event(1, "2025-03-05", "Soirée jazz"),
            event(2, "2025-03-05", "Doublon ignoré"),
            event(3, "2025-03-20", "Marché"),
        ];

        let out = render_march(&events);

        // Two marked days: the shared date surfaces only its first record
        assert!(out.contains("Soirée jazz"));
        assert!(!out.contains("Doublon ignoré"));
        assert!(out.contains("Marché"));
    }

    #[test]
    fn event_line_uses_locale_date_order() {
        let line = event_line(&event(1, "2025-03-05", "Expo"));
        assert_eq!(line, "Expo - 05/03/2025");
    }

    #[test]
    fn detail_hides_absent_optionals() {
        let mut e = event(1, "2025-03-05", "Expo");
        let plain = event_detail(&e);
        assert!(!plain.contains("Promo:"));
        assert!(!plain.contains("Lien:"));

        e.promo = Some(15.0);
        e.link = Some("https://example.com".to_string());
        let full = event_detail(&e);
        assert!(full.contains("15%"));
        assert!(full.contains("https://example.com"));
    }
}

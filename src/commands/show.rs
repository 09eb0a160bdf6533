use anyhow::Result;

use crate::commands::{load_view, parse_month_arg};
use crate::render;

pub async fn run(month: Option<u32>) -> Result<()> {
    let mut view = load_view().await?;

    if let Some(m) = month {
        view.select_month(parse_month_arg(m)?);
    }

    let cells = view.cells();
    let index = view.month_index();
    println!("{}", render::render_month(view.year, view.month(), &cells, &index));

    Ok(())
}

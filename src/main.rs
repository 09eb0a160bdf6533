mod commands;
mod config;
mod render;
mod store;
mod tui;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mtlcal")]
#[command(about = "Browse and manage the 2025 event agenda from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month calendar with event markers
    Show {
        /// Month to display (1-12, defaults to March)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// List every event in the store
    Events,
    /// Add a new event (missing fields are prompted for)
    Add {
        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Event name
        #[arg(short, long)]
        name: Option<String>,

        /// Event description
        #[arg(long)]
        description: Option<String>,

        /// Promo percentage
        #[arg(long)]
        promo: Option<f64>,

        /// Category label
        #[arg(short, long)]
        category: Option<String>,

        /// Link URL
        #[arg(short, long)]
        link: Option<String>,
    },
    /// Delete an event
    Delete {
        /// Id of the event to delete; picks from a list when omitted
        id: Option<i64>,
    },
    /// Show full details for the event on a given day
    Info {
        /// Day of the month (1-31)
        day: u32,

        /// Month the day belongs to (1-12, defaults to March)
        #[arg(short, long)]
        month: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { month } => commands::show::run(month).await,
        Commands::Events => commands::events::run().await,
        Commands::Add {
            date,
            name,
            description,
            promo,
            category,
            link,
        } => commands::add::run(date, name, description, promo, category, link).await,
        Commands::Delete { id } => commands::delete::run(id).await,
        Commands::Info { day, month } => commands::info::run(day, month).await,
    }
}

//! brewery-tracker: track the beers you have had at a brewery
//!
//! State lives in one JSON file (`starkweather_data.json` in the working
//! directory unless overridden). Set `RUST_LOG=debug` for diagnostics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::time::Duration;

use brewery_tracker::config;
use brewery_tracker::tracker::{ScrapeOptions, Store};

mod commands;

#[derive(Parser)]
#[command(name = "brewery-tracker")]
#[command(about = "Track your beers from Starkweather Brewery", long_about = None)]
#[command(version)]
struct Cli {
    /// Path of the JSON data file
    #[arg(long, global = true, env = config::DATA_FILE_ENV)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show summary statistics, inventory and recent activity (default)
    Dashboard,

    /// Record a beer you had
    Add {
        /// Beer name (free text, need not be on the menu)
        name: String,

        /// Date you had it, YYYY-MM-DD (default: today)
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Load the current beer menu from the brewery website
    Refresh {
        /// Menu page URL
        #[arg(long, short, default_value = config::DEFAULT_MENU_URL)]
        url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
    },

    /// List every beer seen on the menu so far
    Menu,
}

fn main() -> Result<()> {
    // Initialize tracing (output to stderr, silent unless RUST_LOG is set)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    let store = Store::new(config::data_file(cli.data_file.as_deref()));
    tracing::debug!(path = %store.path().display(), "using data file");

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => {
            println!("{}", commands::dashboard::execute(&store)?);
        }

        Commands::Add { name, date } => {
            let date = date.as_deref().map(commands::utils::parse_date).transpose()?;
            let record = commands::add::execute(&store, &name, date)?;
            println!("{} Added {}!", "Done:".green(), record.name);
        }

        Commands::Refresh { url, timeout } => {
            let options = ScrapeOptions {
                timeout: Duration::from_secs(timeout),
                ..ScrapeOptions::default()
            };
            println!("Fetching menu from {}...", url.dimmed());
            let outcome = commands::refresh::execute(&store, &url, &options)?;
            println!("{}", commands::refresh::format_outcome(&outcome));
        }

        Commands::Menu => {
            println!("{}", commands::menu::execute(&store)?);
        }
    }

    Ok(())
}

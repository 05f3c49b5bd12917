use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storefront_core::view::UiEvent;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront - assemble catalog pages and drive their interactions", long_about = None)]
struct Cli {
    /// Config file (defaults to <config_dir>/storefront/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Local store file (defaults to <config_dir>/storefront/local_store.toml)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Log level for storefront crates (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a page and print a JSON report of the result
    Render {
        /// Page location, e.g. `index.html` or `product-details.html?id=2`
        location: String,

        /// Site directory or base URL serving pages, fragments and the catalog
        #[arg(long, default_value = ".")]
        origin: String,

        /// Event to dispatch after loading, e.g. `click:reserve-button` (repeatable)
        #[arg(long = "event")]
        events: Vec<UiEvent>,
    },
    /// Inspect or reset the persisted session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Print the session state and stored entries
    Show,
    /// Remove every stored entry
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let config = commands::utils::load_config(cli.config)?;
    let store = commands::utils::open_store(cli.store)?;

    match cli.command {
        Commands::Render {
            location,
            origin,
            events,
        } => commands::render::run(config, &origin, &location, &events, store).await?,
        Commands::Session { action } => match action {
            SessionAction::Show => commands::session::show(store, &config.session_key).await?,
            SessionAction::Clear => commands::session::clear(store).await?,
        },
    }

    Ok(())
}

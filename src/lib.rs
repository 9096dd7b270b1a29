//! rCharityMap library root.
//! Exposes the proximity/clustering engine, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod geocode;
pub mod logging;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Near { .. } => cli::commands::near::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
        Commands::Search { .. } => cli::commands::search::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once and passed down by reference.
    let mut cfg = Config::load()?;

    // Every command, init included, sees the same absolute database path.
    let db = cli.db.as_deref().unwrap_or(&cfg.database);
    cfg.database = utils::path::resolve_db_path(db)?
        .to_string_lossy()
        .to_string();

    let level = if cli.verbose { "debug" } else { cfg.log_level.as_str() };
    logging::init_logging(level)?;

    dispatch(&cli, &cfg)
}

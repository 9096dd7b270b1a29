use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::utils::colors::{color_for_operation, paint};
use crate::utils::formatting::truncate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = open_store(&cfg.database)?;
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(e.date);

            let op = paint(color_for_operation(&e.operation), &e.operation);
            let target = if e.target.is_empty() {
                String::new()
            } else {
                format!(" ({})", truncate(&e.target, 57))
            };

            println!(
                "{:>id_w$}: {:<25} | {}{} => {}",
                e.id,
                date,
                op,
                target,
                e.message,
                id_w = id_w
            );
        }
    }

    Ok(())
}

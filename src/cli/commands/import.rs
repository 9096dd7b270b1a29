use super::load_events;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::initialize::open_store;
use crate::db::queries::upsert_event;
use crate::errors::AppResult;
use crate::source::JsonEventSource;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// Load a JSON export into the store, keeping source ids.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let mut source = JsonEventSource::new(&path);
        let ingested = load_events(&mut source)?;

        let mut pool = open_store(&cfg.database)?;
        let tx = pool.conn.transaction()?;
        for ev in &ingested.events {
            upsert_event(&tx, ev)?;
        }
        tx.commit()?;

        ttlog_soft(
            &pool.conn,
            "import",
            &path.display().to_string(),
            &format!(
                "{} imported, {} rejected",
                ingested.events.len(),
                ingested.rejected.len()
            ),
        );

        success(format!(
            "Imported {} events from {}",
            ingested.events.len(),
            path.display()
        ));
        if !ingested.rejected.is_empty() {
            warning(format!("{} events rejected", ingested.rejected.len()));
        }
    }

    Ok(())
}

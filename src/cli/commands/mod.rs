pub mod add;
pub mod config;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod near;
pub mod search;
pub mod show;

use crate::core::ingest::{Ingested, ingest};
use crate::errors::AppResult;
use crate::source::EventSource;
use crate::ui::messages::warning;

/// Fetch and validate events, reporting rejected records without failing.
pub(crate) fn load_events(source: &mut dyn EventSource) -> AppResult<Ingested> {
    let raws = source.fetch()?;
    ::log::debug!("loaded {} raw events from {}", raws.len(), source.describe());

    let ingested = ingest(raws);
    for r in &ingested.rejected {
        warning(format!("Skipping event #{} '{}': {}", r.id, r.name, r.error));
    }
    Ok(ingested)
}

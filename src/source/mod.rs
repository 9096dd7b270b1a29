//! Event sources: where the raw event list comes from.

use crate::config::Config;
use crate::db::initialize::open_store;
use crate::db::pool::DbPool;
use crate::db::queries::{load_raw_event, load_raw_events};
use crate::errors::AppResult;
use crate::models::event::RawEvent;
use std::fs;
use std::path::{Path, PathBuf};

pub trait EventSource {
    fn fetch(&mut self) -> AppResult<Vec<RawEvent>>;
    fn describe(&self) -> String;

    /// One event by id (`GET /events/<id>`); `None` when no such event exists.
    fn fetch_one(&mut self, id: i64) -> AppResult<Option<RawEvent>> {
        Ok(self.fetch()?.into_iter().find(|e| e.id == id))
    }
}

/// Events stored by `add` / `import`.
pub struct SqliteEventSource {
    pool: DbPool,
    path: String,
}

impl SqliteEventSource {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: open_store(path)?,
            path: path.to_string(),
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            pool,
            path: ":memory:".to_string(),
        }
    }
}

impl EventSource for SqliteEventSource {
    fn fetch(&mut self) -> AppResult<Vec<RawEvent>> {
        load_raw_events(&mut self.pool)
    }

    fn fetch_one(&mut self, id: i64) -> AppResult<Option<RawEvent>> {
        load_raw_event(&mut self.pool, id)
    }

    fn describe(&self) -> String {
        format!("database {}", self.path)
    }
}

/// A JSON array in the `GET /events` response shape.
pub struct JsonEventSource {
    path: PathBuf,
}

impl JsonEventSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

pub fn parse_events_json(content: &str) -> AppResult<Vec<RawEvent>> {
    Ok(serde_json::from_str(content)?)
}

impl EventSource for JsonEventSource {
    fn fetch(&mut self) -> AppResult<Vec<RawEvent>> {
        let content = fs::read_to_string(&self.path)?;
        parse_events_json(&content)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// `--events FILE` wins over the configured database.
pub fn open_source(cfg: &Config, events_file: Option<&str>) -> AppResult<Box<dyn EventSource>> {
    match events_file {
        Some(f) => Ok(Box::new(JsonEventSource::new(f))),
        None => Ok(Box::new(SqliteEventSource::open(&cfg.database)?)),
    }
}

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::{EventRecord, RawEvent};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Load every stored event, unvalidated, in id order.
///
/// Dates stay text here so that a malformed row is rejected by ingestion like
/// any other source, instead of failing the whole query.
pub fn load_raw_events(pool: &mut DbPool) -> AppResult<Vec<RawEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, name, host, date, location, latitude, longitude, description
         FROM events
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load one stored event by id, unvalidated.
pub fn load_raw_event(pool: &mut DbPool, id: i64) -> AppResult<Option<RawEvent>> {
    let ev = pool
        .conn
        .query_row(
            "SELECT id, name, host, date, location, latitude, longitude, description
             FROM events
             WHERE id = ?1",
            [id],
            map_row,
        )
        .optional()?;
    Ok(ev)
}

pub fn map_row(row: &Row) -> rusqlite::Result<RawEvent> {
    Ok(RawEvent {
        id: row.get("id")?,
        name: row.get("name")?,
        host: row.get("host")?,
        date: row.get("date")?,
        location: row.get("location")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        description: row.get("description")?,
    })
}

/// Insert a validated event. The stored id is assigned by SQLite and returned.
pub fn insert_event(pool: &mut DbPool, ev: &EventRecord) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();

    pool.conn.execute(
        "INSERT INTO events (name, host, date, location, latitude, longitude, description, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            ev.name,
            ev.host,
            ev.date_str(),
            ev.location_label,
            ev.coordinates.map(|c| c.latitude()),
            ev.coordinates.map(|c| c.longitude()),
            ev.description,
            now,
        ],
    )?;

    Ok(pool.conn.last_insert_rowid())
}

/// Insert or replace an event keeping its source id (used by `import`).
pub fn upsert_event(conn: &Connection, ev: &EventRecord) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT OR REPLACE INTO events
            (id, name, host, date, location, latitude, longitude, description, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            ev.id,
            ev.name,
            ev.host,
            ev.date_str(),
            ev.location_label,
            ev.coordinates.map(|c| c.latitude()),
            ev.coordinates.map(|c| c.longitude()),
            ev.description,
            now,
        ],
    )?;

    Ok(())
}

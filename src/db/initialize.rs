use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine and
/// returns the names of the migrations applied by this call.
pub fn init_db(conn: &Connection) -> AppResult<Vec<&'static str>> {
    let applied = run_pending_migrations(conn)?;
    Ok(applied)
}

/// Open the event store, bringing its schema up to date first.
///
/// A missing or never-initialized database comes back empty rather than
/// failing on a missing table.
pub fn open_store(path: &str) -> AppResult<DbPool> {
    let pool = DbPool::new(path)?;
    let applied = init_db(&pool.conn)?;
    if !applied.is_empty() {
        log::debug!("{}: applied {} pending migrations", path, applied.len());
    }
    Ok(pool)
}

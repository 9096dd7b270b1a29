use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migration markers are stored there too.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// First schema: events as published by the plain add-event form (no coordinates).
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            host         TEXT NOT NULL,
            date         TEXT NOT NULL,
            location     TEXT NOT NULL,
            description  TEXT DEFAULT 'No description provided.',
            created_at   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn index_events_date(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);")?;
    Ok(())
}

/// Geocoded events: nullable latitude/longitude.
fn add_events_coordinates(conn: &Connection) -> Result<()> {
    if events_has_column(conn, "latitude")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        ALTER TABLE events ADD COLUMN latitude REAL;
        ALTER TABLE events ADD COLUMN longitude REAL;
        "#,
    )?;
    Ok(())
}

fn events_has_column(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('events')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == name {
            return Ok(true);
        }
    }
    Ok(false)
}

type Migration = (&'static str, &'static str, fn(&Connection) -> Result<()>);

/// Ordered list of schema steps. Never reorder or rename an entry.
const MIGRATIONS: &[Migration] = &[
    (
        "20250910_0001_create_events",
        "Created events table",
        create_events_table,
    ),
    (
        "20251004_0002_index_events_date",
        "Added date index to events",
        index_events_date,
    ),
    (
        "20251120_0003_add_events_coordinates",
        "Added latitude/longitude to events",
        add_events_coordinates,
    ),
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Names of the migrations not yet recorded in `log`.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for (version, _, _) in MIGRATIONS {
        if !is_applied(conn, version)? {
            out.push(*version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, returning the ones applied.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for (version, message, step) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        step(conn)?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [version, message],
        )?;

        log::info!("migration applied: {}", version);
        applied.push(*version);
    }

    Ok(applied)
}

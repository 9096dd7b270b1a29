use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::success;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite event store and all pending migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let db_path = cfg.init_all(cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rCharityMap…");
    println!("🗄️  Database   : {}", db_str);

    let conn = Connection::open(&db_path)?;
    let applied = init_db(&conn)?;
    for version in &applied {
        success(format!("Migration applied: {}", version));
    }

    log::ttlog_soft(
        &conn,
        "init",
        "Database initialized",
        &format!(
            "Database initialized at {} ({} migrations)",
            db_str,
            applied.len()
        ),
    );

    println!("✅ Database initialized at {}", db_str);
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::initialize::open_store;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::geocode::{LocationResolver, NominatimResolver};
use crate::models::coordinate::Coordinate;
use crate::models::event::{DEFAULT_DESCRIPTION, EventRecord};
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Publish one event into the store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        name,
        host,
        location,
        lat,
        lon,
        geocode,
        description,
    } = cmd
    {
        //
        // 1. Validate everything before touching the DB
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let mut coordinates = match (lat, lon) {
            (Some(la), Some(lo)) => Some(Coordinate::new(*la, *lo)?),
            _ => None,
        };

        //
        // 2. Optional lookup of the location label
        //
        if *geocode && coordinates.is_none() {
            coordinates = lookup(cfg, location);
        }

        let mut ev = EventRecord {
            id: 0,
            name: name.trim().to_string(),
            host: host.clone().unwrap_or_else(|| cfg.default_host.clone()),
            date: d,
            location_label: location.trim().to_string(),
            coordinates,
            description: description
                .clone()
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        };

        //
        // 3. Store
        //
        let mut pool = open_store(&cfg.database)?;
        ev.id = insert_event(&mut pool, &ev)?;

        let where_ = match ev.coordinates {
            Some(c) => format!("{} ({})", ev.location_label, c),
            None => format!("{} (no coordinates)", ev.location_label),
        };

        ttlog_soft(
            &pool.conn,
            "add",
            &format!("event #{}", ev.id),
            &format!("{} on {} at {}", ev.name, ev.date_str(), where_),
        );

        success(format!(
            "Event #{} '{}' added for {} at {}",
            ev.id,
            ev.name,
            date::pretty(ev.date),
            where_
        ));
    }

    Ok(())
}

/// Resolve the label to its best candidate. A failed lookup is not fatal: the
/// event is still published, only without a map position.
fn lookup(cfg: &Config, location: &str) -> Option<Coordinate> {
    let result = NominatimResolver::from_config(cfg).and_then(|r| r.resolve(location, 1));

    match result {
        Ok(candidates) => candidates.into_iter().next().map(|c| {
            log::info!("geocoded '{}' to {} ({})", location, c.coordinate, c.label);
            c.coordinate
        }),
        Err(e) => {
            warning(format!(
                "Could not geocode '{}': {}. The event will not appear on the map.",
                location, e
            ));
            None
        }
    }
}

use super::load_events;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::proximity::ProximityQuery;
use crate::core::locator::{DEFAULT_SENSOR_TIMEOUT, Locator, SensorReading, StaticSensor};
use crate::core::logic::{Core, MapView};
use crate::core::search::SearchSequencer;
use crate::errors::AppResult;
use crate::geocode::NominatimResolver;
use crate::models::coordinate::Coordinate;
use crate::models::position::ReferencePosition;
use crate::source::open_source;
use crate::utils::colors::{color_for_cluster, color_for_source, paint};
use crate::utils::date;
use crate::utils::formatting::{bold, miles, truncate};
use crate::utils::table::{Column, Table};
use std::time::Instant;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Near {
        here,
        place,
        radius,
        include_past,
        today,
        json,
    } = &cli.command
    {
        //
        // 1. Query parameters
        //
        let today = date::resolve_today(today.as_deref())?;
        let radius = radius.unwrap_or(cfg.default_radius_miles);
        let query = ProximityQuery::new(radius, cfg.exclude_past && !*include_past, today)?;

        //
        // 2. Reference position
        //
        let reference = acquire_reference(cfg, here.as_deref(), place.as_deref())?;

        //
        // 3. Events → map view
        //
        let mut source = open_source(cfg, cli.events.as_deref())?;
        let ingested = load_events(source.as_mut())?;
        let view = Core::build_map_view(reference, &ingested.events, &query);

        if *json {
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else {
            print_view(&view);
        }
    }

    Ok(())
}

/// `--place` goes through the resolver; otherwise the locator runs against the
/// `--here` fix, falling back to the configured coordinate without one.
fn acquire_reference(
    cfg: &Config,
    here: Option<&str>,
    place: Option<&str>,
) -> AppResult<ReferencePosition> {
    let mut locator = Locator::new(cfg.fallback_coordinate()?, DEFAULT_SENSOR_TIMEOUT);

    if let Some(q) = place {
        let resolver = NominatimResolver::from_config(cfg)?;
        let mut searches = SearchSequencer::new();
        let pos = searches.run(&resolver, q, cfg.resolver_limit)?;
        locator.manual_override(pos);
        return locator
            .reference()
            .ok_or_else(|| crate::errors::AppError::Other("manual position not applied".into()));
    }

    let reading = match here {
        Some(h) => Some(SensorReading::Fix(Coordinate::parse_pair(h)?)),
        None => None,
    };

    let pos = locator.acquire(&StaticSensor(reading), Instant::now());
    log::debug!("locator settled in state '{}'", locator.state().name());
    Ok(pos)
}

fn print_view(view: &MapView<'_>) {
    let source = view.reference.source;
    let label = view
        .reference
        .label
        .as_deref()
        .map(|l| format!(" ({})", l))
        .unwrap_or_default();

    println!(
        "{} {}{}",
        paint(color_for_source(source), source.describe()),
        view.reference.coordinate,
        label
    );
    println!();

    if view.results.is_empty() {
        println!(
            "No events found within {} miles. Try searching a different location.",
            view.radius_miles
        );
        return;
    }

    println!(
        "{}",
        bold(&format!(
            "Nearby events ({}) within {} miles",
            view.results.len(),
            view.radius_miles
        ))
    );

    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("DISTANCE", 9),
        Column::new("DATE", 12),
        Column::new("NAME", 20),
        Column::new("HOST", 16),
        Column::new("LOCATION", 20),
    ]);
    for r in &view.results {
        table.add_row(vec![
            r.event.id.to_string(),
            miles(r.distance_miles),
            date::pretty(r.event.date),
            truncate(&r.event.name, 40),
            truncate(&r.event.host, 30),
            truncate(&r.event.location_label, 40),
        ]);
    }
    table.fit();
    print!("{}", table.render());
    println!();

    println!(
        "{}",
        bold(&format!(
            "Map markers ({}, {} shared)",
            view.clusters.len(),
            view.multi_count()
        ))
    );
    for c in &view.clusters {
        let marker = if c.is_multi() {
            format!("{} events at this location", c.len())
        } else {
            "1 event".to_string()
        };
        println!(
            "{} {}  {}",
            paint(color_for_cluster(c.is_multi()), "●"),
            c.key,
            marker
        );
        for m in &c.members {
            println!("    #{} {} ({})", m.event.id, m.event.name, miles(m.distance_miles));
        }
    }
}

mod common;
use common::{CENTER_EVENTS_JSON, setup_test_db, write_events_json};
use rcharitymap::core::ingest::ingest;
use rcharitymap::db::initialize::init_db;
use rcharitymap::db::migrate::pending_migrations;
use rcharitymap::db::pool::DbPool;
use rcharitymap::db::queries::{insert_event, load_raw_events, upsert_event};
use rcharitymap::errors::AppError;
use rcharitymap::models::coordinate::Coordinate;
use rcharitymap::models::event::{DEFAULT_DESCRIPTION, EventRecord, RawEvent};
use rcharitymap::source::{EventSource, JsonEventSource, SqliteEventSource, parse_events_json};

fn raw(id: i64, date: &str, lat: Option<f64>, lon: Option<f64>) -> RawEvent {
    RawEvent {
        id,
        name: format!("Event {}", id),
        host: "Red Cross".to_string(),
        date: date.to_string(),
        location: "Topeka, KS".to_string(),
        latitude: lat,
        longitude: lon,
        description: None,
    }
}

#[test]
fn test_coordinate_ranges() {
    assert!(Coordinate::new(90.0, 180.0).is_ok());
    assert!(Coordinate::new(-90.0, -180.0).is_ok());
    assert!(matches!(
        Coordinate::new(90.0001, 0.0),
        Err(AppError::InvalidCoordinate { .. })
    ));
    assert!(Coordinate::new(0.0, -180.5).is_err());
    assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn test_parse_pair() {
    let c = Coordinate::parse_pair(" 39.8283 , -98.5795 ").unwrap();
    assert_eq!(c.latitude(), 39.8283);
    assert_eq!(c.longitude(), -98.5795);

    assert!(matches!(Coordinate::parse_pair("39.8"), Err(AppError::InvalidNumber(_))));
    assert!(matches!(Coordinate::parse_pair("abc,1"), Err(AppError::InvalidNumber(_))));
}

#[test]
fn test_record_conversion() {
    let ev = EventRecord::try_from(raw(1, "2024-06-10", Some(40.0), Some(-75.0))).unwrap();
    assert_eq!(ev.date_str(), "2024-06-10");
    assert_eq!(ev.description, DEFAULT_DESCRIPTION);
    assert!(ev.has_coordinates());

    // Half a pair is no pair.
    let ev = EventRecord::try_from(raw(2, "2024-06-10", Some(40.0), None)).unwrap();
    assert!(ev.coordinates.is_none());
}

#[test]
fn test_record_errors_are_per_record() {
    let out = ingest(vec![
        raw(1, "2024-06-10", Some(40.0), Some(-75.0)),
        raw(2, "06/10/2024", None, None),
        raw(3, "2024-06-10", Some(120.0), Some(0.0)),
        raw(4, "2024-06-11", None, None),
    ]);

    assert_eq!(out.events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 4]);
    assert_eq!(out.rejected.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3]);
    assert!(matches!(out.rejected[0].error, AppError::InvalidDate(_)));
    assert!(matches!(out.rejected[1].error, AppError::InvalidCoordinate { .. }));
    assert!(out.rejected.iter().all(|r| r.error.is_record_error()));
}

#[test]
fn test_events_json_shape() {
    let raws = parse_events_json(CENTER_EVENTS_JSON).unwrap();
    assert_eq!(raws.len(), 6);
    assert_eq!(raws[2].latitude, None);
    assert_eq!(raws[2].description, None);

    // Optional fields may be missing entirely.
    let raws = parse_events_json(
        r#"[{"id": 9, "name": "Gala", "host": "Rotary", "date": "2024-06-10", "location": "Hall"}]"#,
    )
    .unwrap();
    assert_eq!(raws[0].longitude, None);

    assert!(matches!(parse_events_json("{"), Err(AppError::Json(_))));
}

#[test]
fn test_migrations_apply_once() {
    let pool = DbPool::in_memory().unwrap();
    assert_eq!(pending_migrations(&pool.conn).unwrap().len(), 3);

    assert_eq!(
        init_db(&pool.conn).unwrap(),
        vec![
            "20250910_0001_create_events",
            "20251004_0002_index_events_date",
            "20251120_0003_add_events_coordinates",
        ]
    );
    assert!(pending_migrations(&pool.conn).unwrap().is_empty());
    assert!(init_db(&pool.conn).unwrap().is_empty());
}

#[test]
fn test_store_round_trip_through_ingestion() {
    let mut pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();

    let geo = EventRecord::try_from(raw(0, "2024-06-10", Some(39.05), Some(-95.68))).unwrap();
    let plain = EventRecord::try_from(raw(0, "2024-06-11", None, None)).unwrap();

    assert_eq!(insert_event(&mut pool, &geo).unwrap(), 1);
    assert_eq!(insert_event(&mut pool, &plain).unwrap(), 2);

    // A row written by hand with a bad date is rejected on load, not fatal.
    pool.conn
        .execute(
            "INSERT INTO events (name, host, date, location, created_at)
             VALUES ('Bad', 'Nobody', 'someday', 'Nowhere', 'now')",
            [],
        )
        .unwrap();

    let raws = load_raw_events(&mut pool).unwrap();
    assert_eq!(raws.len(), 3);

    let out = ingest(raws);
    assert_eq!(out.events.len(), 2);
    assert_eq!(out.events[0].coordinates, geo.coordinates);
    assert_eq!(out.events[1].description, DEFAULT_DESCRIPTION);
    assert_eq!(out.rejected[0].name, "Bad");
}

#[test]
fn test_upsert_keeps_source_id() {
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();

    let mut ev = EventRecord::try_from(raw(42, "2024-06-10", None, None)).unwrap();
    upsert_event(&pool.conn, &ev).unwrap();
    ev.name = "Renamed".to_string();
    upsert_event(&pool.conn, &ev).unwrap();

    let mut source = SqliteEventSource::from_pool(pool);
    let raws = source.fetch().unwrap();
    assert_eq!(raws.len(), 1);
    assert_eq!(raws[0].id, 42);
    assert_eq!(raws[0].name, "Renamed");
}

#[test]
fn test_fetch_one_by_id() {
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    let ev = EventRecord::try_from(raw(42, "2024-06-10", Some(39.05), Some(-95.68))).unwrap();
    upsert_event(&pool.conn, &ev).unwrap();

    let mut db = SqliteEventSource::from_pool(pool);
    assert_eq!(db.fetch_one(42).unwrap().map(|r| r.id), Some(42));
    assert!(db.fetch_one(43).unwrap().is_none());

    let path = write_events_json("fetch_one", CENTER_EVENTS_JSON);
    let mut file = JsonEventSource::new(&path);
    let four = file.fetch_one(4).unwrap().unwrap();
    assert_eq!(four.name, "Book Drive");
    assert!(file.fetch_one(99).unwrap().is_none());
}

#[test]
fn test_opening_fresh_store_applies_schema() {
    let db_path = setup_test_db("fresh_store");

    let mut source = SqliteEventSource::open(&db_path).unwrap();
    assert!(source.fetch().unwrap().is_empty());

    let pool = DbPool::new(&db_path).unwrap();
    assert!(pending_migrations(&pool.conn).unwrap().is_empty());
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rcharitymap::models::coordinate::Coordinate;
use rcharitymap::models::event::EventRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcm() -> Command {
    let mut cmd = cargo_bin_cmd!("rcharitymap");
    // Keep the user's real config out of the way.
    cmd.env("HOME", env::temp_dir().join("rcharitymap_test_home"));
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcharitymap.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a JSON events file (GET /events shape) into the temp dir.
pub fn write_events_json(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_events.json", name));
    fs::write(&path, json).expect("write events file");
    path.to_string_lossy().to_string()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).expect("valid coordinate")
}

pub fn event(id: i64, day: &str, at: Option<(f64, f64)>) -> EventRecord {
    EventRecord {
        id,
        name: format!("Event {}", id),
        host: "Food Bank".to_string(),
        date: date(day),
        location_label: format!("Place {}", id),
        coordinates: at.map(|(lat, lon)| coord(lat, lon)),
        description: "Volunteers welcome".to_string(),
    }
}

/// Events around the geographic center of the US used by several scenarios.
pub const CENTER_EVENTS_JSON: &str = r#"[
  {"id": 1, "name": "Pancake Breakfast", "host": "Lions Club", "date": "2030-06-01",
   "location": "Lebanon, KS", "latitude": 39.90, "longitude": -98.60,
   "description": "Fundraiser breakfast"},
  {"id": 2, "name": "Fun Run", "host": "Smith Center PTA", "date": "2030-06-02",
   "location": "Far away", "latitude": 40.50, "longitude": -99.00,
   "description": "5k"},
  {"id": 3, "name": "Bake Sale", "host": "Church", "date": "2030-06-03",
   "location": "Online", "latitude": null, "longitude": null,
   "description": null},
  {"id": 4, "name": "Book Drive", "host": "Library", "date": "2030-06-04",
   "location": "Lebanon, KS", "latitude": 39.90, "longitude": -98.60,
   "description": "Bring books"},
  {"id": 5, "name": "Old Gala", "host": "Rotary", "date": "2001-01-01",
   "location": "Lebanon, KS", "latitude": 39.91, "longitude": -98.61,
   "description": "Long ago"},
  {"id": 6, "name": "Broken", "host": "Nobody", "date": "2030-13-45",
   "location": "Nowhere", "latitude": 39.90, "longitude": -98.60,
   "description": "bad date"}
]"#;

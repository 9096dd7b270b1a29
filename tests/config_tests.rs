use rcharitymap::config::{Config, FALLBACK_LATITUDE, FALLBACK_LONGITUDE, migrate};
use rcharitymap::logging::normalize_level;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("absent.conf")).unwrap();

    assert_eq!(cfg.default_radius_miles, 50.0);
    assert!(cfg.exclude_past);
    assert_eq!(cfg.resolver_limit, 5);
    assert_eq!(cfg.log_level, "warn");
    let fb = cfg.fallback_coordinate().unwrap();
    assert_eq!((fb.latitude(), fb.longitude()), (FALLBACK_LATITUDE, FALLBACK_LONGITUDE));
}

#[test]
fn test_partial_file_is_completed_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rcharitymap.conf");
    fs::write(&path, "database: /tmp/x.sqlite\ndefault_radius_miles: 25\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.default_radius_miles, 25.0);
    assert_eq!(cfg.default_host, "Unknown host");
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rcharitymap.conf");

    fs::write(&path, "default_radius_miles: -1\n").unwrap();
    assert!(Config::load_from(&path).is_err());

    fs::write(&path, "fallback_latitude: 100\n").unwrap();
    assert!(Config::load_from(&path).is_err());

    fs::write(&path, "resolver_limit: 0\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_check_and_migrate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rcharitymap.conf");
    fs::write(&path, "database: /tmp/keep.sqlite\nexclude_past: false\n").unwrap();

    let missing = migrate::missing_fields(&path).unwrap();
    assert!(missing.contains(&"resolver_url".to_string()));
    assert!(!missing.contains(&"database".to_string()));

    let added = migrate::migrate_file(&path).unwrap();
    assert_eq!(added, missing);
    assert!(migrate::missing_fields(&path).unwrap().is_empty());
    assert!(migrate::migrate_file(&path).unwrap().is_empty());

    // User values survive.
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/keep.sqlite");
    assert!(!cfg.exclude_past);
}

#[test]
fn test_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rcharitymap.conf");

    let cfg = Config {
        default_radius_miles: 12.5,
        ..Config::default()
    };
    cfg.save_to(&path).unwrap();

    let back = Config::load_from(&path).unwrap();
    assert_eq!(back.default_radius_miles, 12.5);
}

#[test]
fn test_log_levels() {
    assert_eq!(normalize_level("WARNING").unwrap(), "warn");
    assert_eq!(normalize_level(" debug ").unwrap(), "debug");
    assert!(normalize_level("loud").is_err());
}

mod common;
use common::coord;
use rcharitymap::core::locator::{Locator, LocatorState, SensorReading, StaticSensor};
use rcharitymap::models::position::{ReferencePosition, SourceKind};
use std::time::{Duration, Instant};

const TIMEOUT: Duration = Duration::from_secs(10);

fn locator() -> Locator {
    Locator::new(coord(39.8283, -98.5795), TIMEOUT)
}

#[test]
fn test_fix_grants_sensor_position() {
    let now = Instant::now();
    let mut loc = locator();
    loc.start(true, now);
    assert_eq!(*loc.state(), LocatorState::Pending);
    assert!(loc.reference().is_none());

    assert!(loc.on_fix(coord(40.0, -75.0)));
    assert_eq!(*loc.state(), LocatorState::Granted(coord(40.0, -75.0)));
    assert!(!loc.has_pending_timer());

    let r = loc.reference().unwrap();
    assert_eq!(r.source, SourceKind::Sensor);
    assert_eq!(r.coordinate, coord(40.0, -75.0));

    // A late timeout must not override the fix.
    assert!(!loc.poll(now + TIMEOUT * 2));
    assert_eq!(r, loc.reference().unwrap());
}

#[test]
fn test_unsupported_falls_back_only_on_poll() {
    let now = Instant::now();
    let mut loc = locator();
    loc.start(false, now);

    assert_eq!(*loc.state(), LocatorState::Unsupported);
    assert!(loc.reference().is_none());
    assert!(loc.has_pending_timer());

    assert!(loc.poll(now));
    assert_eq!(*loc.state(), LocatorState::Fallback);
    let r = loc.reference().unwrap();
    assert_eq!(r.source, SourceKind::Fallback);
    assert_eq!(r.coordinate, coord(39.8283, -98.5795));
}

#[test]
fn test_denied_then_fallback() {
    let now = Instant::now();
    let mut loc = locator();
    loc.start(true, now);

    assert!(loc.on_denied(now));
    assert_eq!(*loc.state(), LocatorState::Denied);
    assert!(loc.reference().is_none());

    assert!(loc.poll(now));
    assert_eq!(*loc.state(), LocatorState::Fallback);
}

#[test]
fn test_timeout_counts_as_denied() {
    let now = Instant::now();
    let mut loc = locator();
    loc.start(true, now);

    assert!(!loc.poll(now + Duration::from_secs(9)));
    assert_eq!(*loc.state(), LocatorState::Pending);

    assert!(loc.poll(now + TIMEOUT));
    assert_eq!(*loc.state(), LocatorState::Fallback);
}

#[test]
fn test_fix_after_denial_is_ignored() {
    let now = Instant::now();
    let mut loc = locator();
    loc.start(true, now);
    loc.on_denied(now);

    assert!(!loc.on_fix(coord(40.0, -75.0)));
    assert_eq!(*loc.state(), LocatorState::Denied);
}

#[test]
fn test_manual_override_wins_and_cancels_timers() {
    let now = Instant::now();
    let manual = ReferencePosition::manual(coord(51.5074, -0.1278), "London");

    for capability in [true, false] {
        let mut loc = locator();
        loc.start(capability, now);
        loc.manual_override(manual.clone());

        assert!(!loc.has_pending_timer());
        assert!(!loc.poll(now + TIMEOUT * 3));
        assert_eq!(*loc.state(), LocatorState::ManualOverride(manual.clone()));
        assert_eq!(loc.reference().unwrap().source, SourceKind::ManualSearch);
        assert_eq!(loc.reference().unwrap().label.as_deref(), Some("London"));
    }
}

#[test]
fn test_manual_override_after_fallback() {
    let now = Instant::now();
    let mut loc = locator();
    loc.start(false, now);
    loc.poll(now);

    loc.manual_override(ReferencePosition::manual(coord(40.0, -75.0), "Philadelphia"));
    assert_eq!(loc.reference().unwrap().coordinate, coord(40.0, -75.0));
}

#[test]
fn test_restart_discards_previous_timer() {
    let now = Instant::now();
    let mut loc = locator();
    loc.start(false, now);
    // Restart with a sensor before the fallback fired.
    loc.start(true, now);

    assert!(!loc.poll(now));
    assert_eq!(*loc.state(), LocatorState::Pending);
}

#[test]
fn test_acquire_with_static_sensors() {
    let now = Instant::now();

    let pos = locator().acquire(&StaticSensor(Some(SensorReading::Fix(coord(40.0, -75.0)))), now);
    assert_eq!(pos.source, SourceKind::Sensor);

    let pos = locator().acquire(&StaticSensor(Some(SensorReading::Denied)), now);
    assert_eq!(pos.source, SourceKind::Fallback);

    let pos = locator().acquire(&StaticSensor(Some(SensorReading::Silent)), now);
    assert_eq!(pos.source, SourceKind::Fallback);

    let pos = locator().acquire(&StaticSensor(None), now);
    assert_eq!(pos.source, SourceKind::Fallback);
    assert_eq!(pos.coordinate, coord(39.8283, -98.5795));
}

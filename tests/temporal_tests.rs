mod common;
use common::{date, event};
use rcharitymap::core::calculator::temporal::partition;
use rcharitymap::core::ingest::ingest;
use rcharitymap::errors::AppError;
use rcharitymap::models::event::RawEvent;

fn ids(v: &[&rcharitymap::models::event::EventRecord]) -> Vec<i64> {
    v.iter().map(|e| e.id).collect()
}

#[test]
fn test_today_is_upcoming_yesterday_is_past() {
    let events = vec![event(1, "2024-06-01", None), event(2, "2024-05-31", None)];

    let p = partition(&events, date("2024-06-01"));

    assert_eq!(ids(&p.upcoming), vec![1]);
    assert_eq!(ids(&p.past), vec![2]);
}

#[test]
fn test_sort_orders() {
    let events = vec![
        event(1, "2024-07-10", None),
        event(2, "2024-05-01", None),
        event(3, "2024-06-02", None),
        event(4, "2024-05-20", None),
        event(5, "2024-06-01", None),
    ];

    let p = partition(&events, date("2024-06-01"));

    // upcoming: soonest first
    assert_eq!(ids(&p.upcoming), vec![5, 3, 1]);
    // past: most recent first
    assert_eq!(ids(&p.past), vec![4, 2]);
}

#[test]
fn test_same_day_ties_by_id() {
    let events = vec![
        event(9, "2024-06-05", None),
        event(3, "2024-06-05", None),
        event(7, "2024-01-01", None),
        event(2, "2024-01-01", None),
    ];

    let p = partition(&events, date("2024-06-01"));

    assert_eq!(ids(&p.upcoming), vec![3, 9]);
    assert_eq!(ids(&p.past), vec![2, 7]);
}

#[test]
fn test_every_event_in_exactly_one_list() {
    let events: Vec<_> = (1..=30)
        .map(|i| event(i, &format!("2024-06-{:02}", i), None))
        .collect();

    let p = partition(&events, date("2024-06-15"));

    assert_eq!(p.len(), events.len());
    let mut all = ids(&p.upcoming);
    all.extend(ids(&p.past));
    all.sort();
    assert_eq!(all, (1..=30).collect::<Vec<_>>());
    assert!(p.upcoming.iter().all(|e| e.date >= date("2024-06-15")));
    assert!(p.past.iter().all(|e| e.date < date("2024-06-15")));
}

#[test]
fn test_empty_input() {
    let p = partition(&[], date("2024-06-01"));
    assert!(p.is_empty());
}

#[test]
fn test_malformed_date_excluded_without_failing_batch() {
    let raw = |id: i64, d: &str| RawEvent {
        id,
        name: format!("E{id}"),
        host: "Host".into(),
        date: d.into(),
        location: "Somewhere".into(),
        latitude: None,
        longitude: None,
        description: None,
    };

    let ingested = ingest(vec![
        raw(1, "2024-06-01"),
        raw(2, "06/01/2024"),
        raw(3, "2024-05-31"),
        raw(4, "2024-06-01T10:00:00Z"),
    ]);

    assert_eq!(ingested.events.len(), 2);
    assert_eq!(ingested.rejected.len(), 2);
    assert!(
        ingested
            .rejected
            .iter()
            .all(|r| matches!(r.error, AppError::InvalidDate(_)))
    );

    let p = partition(&ingested.events, date("2024-06-01"));
    assert_eq!(ids(&p.upcoming), vec![1]);
    assert_eq!(ids(&p.past), vec![3]);
}

use crate::models::event::EventRecord;
use chrono::NaiveDate;

/// Events split around a calendar day.
#[derive(Debug, Default, Clone)]
pub struct Partition<'a> {
    /// `date >= today`, soonest first.
    pub upcoming: Vec<&'a EventRecord>,
    /// `date < today`, most recent first.
    pub past: Vec<&'a EventRecord>,
}

impl Partition<'_> {
    pub fn len(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// True when the event happens on `today` or later.
///
/// Both sides are plain calendar days: no time-of-day and no UTC conversion.
pub fn is_upcoming(event: &EventRecord, today: NaiveDate) -> bool {
    event.date >= today
}

pub fn partition(events: &[EventRecord], today: NaiveDate) -> Partition<'_> {
    let (mut upcoming, mut past): (Vec<&EventRecord>, Vec<&EventRecord>) =
        events.iter().partition(|e| is_upcoming(e, today));

    // Same-day events keep a stable order by id in both lists.
    upcoming.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
    past.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));

    log::debug!(
        "partition at {}: {} upcoming, {} past",
        today,
        upcoming.len(),
        past.len()
    );

    Partition { upcoming, past }
}

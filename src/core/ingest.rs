use crate::errors::AppError;
use crate::models::event::{EventRecord, RawEvent};

/// A record that could not be admitted, with the reason.
#[derive(Debug)]
pub struct Rejected {
    pub id: i64,
    pub name: String,
    pub error: AppError,
}

#[derive(Debug, Default)]
pub struct Ingested {
    pub events: Vec<EventRecord>,
    pub rejected: Vec<Rejected>,
}

/// Validate a batch from the event source. A bad record is set aside; the rest go through.
pub fn ingest(raws: Vec<RawEvent>) -> Ingested {
    let mut out = Ingested::default();

    for raw in raws {
        let id = raw.id;
        let name = raw.name.clone();
        match EventRecord::try_from(raw) {
            Ok(ev) => out.events.push(ev),
            Err(error) => {
                log::warn!("event #{} '{}' rejected: {}", id, name, error);
                out.rejected.push(Rejected { id, name, error });
            }
        }
    }

    out
}

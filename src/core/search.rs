//! Serializes location searches so that a slow response cannot overwrite the
//! reference position chosen by a newer one.

use crate::errors::{AppError, AppResult};
use crate::geocode::{Candidate, LocationResolver};
use crate::models::position::ReferencePosition;

/// Handle for one submitted search. Only the holder of the newest ticket may
/// change the reference position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub sequence: u64,
    pub query: String,
}

#[derive(Debug)]
pub enum SearchCompletion {
    /// Latest request, first candidate taken as the new reference.
    Applied(ReferencePosition),
    /// A newer request was submitted; this response was discarded.
    Stale { sequence: u64, latest: u64 },
    /// Latest request failed; the reference position is unchanged.
    Failed(AppError),
}

#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: u64,
    in_flight: Option<u64>,
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn latest_sequence(&self) -> u64 {
        self.latest
    }

    /// Submit a search, refusing while another one is outstanding.
    pub fn try_begin(&mut self, query: &str) -> AppResult<SearchTicket> {
        if let Some(seq) = self.in_flight {
            return Err(AppError::SearchInProgress(seq));
        }
        Ok(self.begin(query))
    }

    /// Submit a search that supersedes any outstanding one.
    pub fn begin(&mut self, query: &str) -> SearchTicket {
        self.latest += 1;
        self.in_flight = Some(self.latest);
        SearchTicket {
            sequence: self.latest,
            query: query.to_string(),
        }
    }

    /// Deliver the resolver outcome for `ticket`.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        outcome: AppResult<Vec<Candidate>>,
    ) -> SearchCompletion {
        if ticket.sequence != self.latest {
            log::debug!(
                "discarding stale search #{} ('{}'), latest is #{}",
                ticket.sequence,
                ticket.query,
                self.latest
            );
            return SearchCompletion::Stale {
                sequence: ticket.sequence,
                latest: self.latest,
            };
        }

        self.in_flight = None;

        match outcome {
            Ok(candidates) => match candidates.into_iter().next() {
                Some(c) => SearchCompletion::Applied(ReferencePosition::manual(c.coordinate, c.label)),
                None => SearchCompletion::Failed(AppError::NotFound(ticket.query.clone())),
            },
            Err(e) => SearchCompletion::Failed(e),
        }
    }

    /// Begin, resolve and complete in one call (the CLI has one request at a time).
    pub fn run<R: LocationResolver + ?Sized>(
        &mut self,
        resolver: &R,
        query: &str,
        limit: usize,
    ) -> AppResult<ReferencePosition> {
        let ticket = self.try_begin(query)?;
        let outcome = resolver.resolve(query, limit);

        match self.complete(&ticket, outcome) {
            SearchCompletion::Applied(pos) => Ok(pos),
            SearchCompletion::Failed(e) => Err(e),
            SearchCompletion::Stale { sequence, latest } => Err(AppError::Other(format!(
                "search #{} superseded by #{}",
                sequence, latest
            ))),
        }
    }
}

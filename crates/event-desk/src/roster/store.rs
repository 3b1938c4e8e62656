use super::domain::Candidate;
use super::filter::{self, RosterFilter};
use crate::api::{ApiError, EventApi};

/// Result of the most recent fetch, reported to the caller as a value
/// rather than an error: a failed fetch leaves the console interactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch has been issued yet.
    Idle,
    Loaded { count: usize },
    /// The roster was emptied; the message backs the user-facing notice.
    Failed { message: String },
    /// The completion belonged to an event that is no longer active and
    /// was discarded without touching the store.
    Superseded,
}

/// Holds the candidate list fetched for one event plus the filter state.
/// The list is replaced wholesale on every load; filter state lives
/// independently of the fetch lifecycle.
#[derive(Debug)]
pub struct RosterStore {
    active_event: Option<String>,
    candidates: Vec<Candidate>,
    filter: RosterFilter,
    status: FetchStatus,
}

impl RosterStore {
    pub fn new() -> Self {
        Self {
            active_event: None,
            candidates: Vec::new(),
            filter: RosterFilter::default(),
            status: FetchStatus::Idle,
        }
    }

    /// Mark `event_id` as the roster this view now shows. Completions for
    /// any other event are stale from this point on.
    pub fn activate(&mut self, event_id: &str) {
        self.active_event = Some(event_id.to_string());
    }

    /// Fetch the roster for `event_id` and install the completion. There
    /// is no cancellation of earlier requests; ordering is enforced at
    /// install time instead.
    pub async fn load(&mut self, api: &EventApi, event_id: &str) -> FetchStatus {
        self.activate(event_id);
        let outcome = api.candidates(event_id).await;
        self.install(event_id, outcome)
    }

    /// Install a completed fetch. A completion whose event id no longer
    /// matches the active one is discarded so that a slow earlier fetch
    /// cannot overwrite a newer roster.
    pub fn install(
        &mut self,
        event_id: &str,
        outcome: Result<Vec<Candidate>, ApiError>,
    ) -> FetchStatus {
        if self.active_event.as_deref() != Some(event_id) {
            tracing::debug!(%event_id, "discarding superseded roster fetch");
            return FetchStatus::Superseded;
        }

        match outcome {
            Ok(rows) => {
                self.status = FetchStatus::Loaded { count: rows.len() };
                self.candidates = rows;
            }
            Err(err) => {
                tracing::warn!(%event_id, error = %err, "candidate fetch failed");
                self.candidates.clear();
                self.status = FetchStatus::Failed {
                    message: err.to_string(),
                };
            }
        }
        self.status.clone()
    }

    /// The filtered view, recomputed on demand from the full list.
    pub fn visible(&self) -> Vec<&Candidate> {
        filter::visible(&self.candidates, &self.filter)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn filter(&self) -> &RosterFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut RosterFilter {
        &mut self.filter
    }

    pub fn reset_filter(&mut self) {
        self.filter.reset();
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn active_event(&self) -> Option<&str> {
        self.active_event.as_deref()
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

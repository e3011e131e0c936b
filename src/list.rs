//! Submissions list controller
//!
//! Loads the feedback collection and keeps the last successful result. Each
//! refresh replaces the list wholesale; there is no merging or caching
//! between refreshes.

use crate::api::FeedbackService;
use crate::error::{Error, Result};
use crate::types::{FeedbackId, FeedbackRecord, StatusChoice};
use tracing::{debug, warn};

/// Load state of the list
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    /// Nothing requested yet, or invalidated
    Idle,
    /// A refresh is in flight
    Loading,
    /// At least one record loaded
    Loaded(Vec<FeedbackRecord>),
    /// Server answered with no records
    Empty,
    /// Last refresh failed; message suitable for an error banner
    Failed(String),
}

/// Handle identifying one refresh
///
/// Returned by [`SubmissionsList::begin_refresh`] and passed back to
/// [`SubmissionsList::complete_refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// The submissions list with its load state
#[derive(Debug, Clone)]
pub struct SubmissionsList {
    state: ListState,
    generation: u64,
}

impl Default for SubmissionsList {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionsList {
    /// Create an idle list
    pub const fn new() -> Self {
        Self {
            state: ListState::Idle,
            generation: 0,
        }
    }

    /// Current state
    pub const fn state(&self) -> &ListState {
        &self.state
    }

    /// Loaded records; empty unless the state is [`ListState::Loaded`]
    pub fn records(&self) -> &[FeedbackRecord] {
        match &self.state {
            ListState::Loaded(records) => records.as_slice(),
            _ => &[],
        }
    }

    /// Loaded records whose status matches `status`, ignoring case
    pub fn records_with_status<'a>(
        &'a self,
        status: &'a str,
    ) -> impl Iterator<Item = &'a FeedbackRecord> + 'a {
        self.records()
            .iter()
            .filter(move |r| r.status_str().trim().eq_ignore_ascii_case(status.trim()))
    }

    /// Find a loaded record by id
    pub fn find(&self, id: &FeedbackId) -> Option<&FeedbackRecord> {
        self.records().iter().find(|r| &r.id == id)
    }

    /// Drop loaded data so the next activation starts from idle
    pub fn invalidate(&mut self) {
        self.state = ListState::Idle;
    }

    /// Mark a refresh as started
    ///
    /// Any refresh begun earlier becomes stale: its completion is ignored.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.state = ListState::Loading;
        RefreshTicket(self.generation)
    }

    /// Apply the outcome of a refresh
    ///
    /// Returns `false` if a newer refresh has been started since `ticket`
    /// was issued, in which case the outcome is discarded.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        outcome: Result<Vec<FeedbackRecord>>,
    ) -> bool {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale refresh"
            );
            return false;
        }

        self.state = match outcome {
            Ok(records) if records.is_empty() => ListState::Empty,
            Ok(records) => ListState::Loaded(records),
            Err(e) => {
                warn!(error = %e, "failed to load feedback");
                ListState::Failed(format!("Failed to load submissions: {e}"))
            }
        };
        true
    }

    /// Fetch the collection and replace the list
    pub async fn refresh(&mut self, service: &dyn FeedbackService) -> &ListState {
        let ticket = self.begin_refresh();
        let outcome = service.list_feedback().await;
        self.complete_refresh(ticket, outcome);
        &self.state
    }

    /// Change the status of a loaded record
    ///
    /// The local copy is updated only after the server confirms the change.
    /// On failure the list is left as it was and the error is returned.
    pub async fn change_status(
        &mut self,
        service: &dyn FeedbackService,
        id: &FeedbackId,
        status: StatusChoice,
    ) -> Result<()> {
        if self.find(id).is_none() {
            return Err(Error::RecordNotFound(id.to_string()));
        }

        if let Err(e) = service.update_status(id, status).await {
            warn!(%id, status = status.wire_value(), error = %e, "error updating status");
            return Err(e);
        }

        if let ListState::Loaded(records) = &mut self.state {
            if let Some(record) = records.iter_mut().find(|r| &r.id == id) {
                record.status = Some(status.wire_value().to_string());
            }
        }
        Ok(())
    }
}

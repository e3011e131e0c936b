//! View session
//!
//! Owns which view is showing along with the form and list behind it. Front
//! ends hold a `Session` and pass it where needed instead of sharing a global
//! current-view flag.

use crate::api::{FeedbackService, SubmitReceipt};
use crate::error::Result;
use crate::form::{Notifier, SubmissionForm};
use crate::list::SubmissionsList;
use crate::types::{FeedbackId, StatusChoice};
use std::fmt;

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The feedback form
    #[default]
    SubmitFeedback,
    /// The submissions list
    Dashboard,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubmitFeedback => write!(f, "Submit Feedback"),
            Self::Dashboard => write!(f, "Dashboard"),
        }
    }
}

/// State for one client session
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: View,
    /// Submission form
    pub form: SubmissionForm,
    /// Submissions list
    pub list: SubmissionsList,
}

impl Session {
    /// Create a session showing the feedback form
    pub fn new() -> Self {
        Self::default()
    }

    /// View currently showing
    pub const fn current_view(&self) -> View {
        self.current
    }

    /// Switch views
    ///
    /// Activating the dashboard always reloads the list.
    pub async fn show(&mut self, view: View, service: &dyn FeedbackService) {
        self.current = view;
        if view == View::Dashboard {
            self.list.refresh(service).await;
        }
    }

    /// Reload the list if the dashboard is showing
    pub async fn refresh(&mut self, service: &dyn FeedbackService) {
        if self.current == View::Dashboard {
            self.list.refresh(service).await;
        }
    }

    /// Submit the form
    ///
    /// After a successful submit the list no longer reflects the server, so it
    /// is invalidated, and reloaded right away if it is on screen.
    pub async fn submit(
        &mut self,
        service: &dyn FeedbackService,
        notifier: &dyn Notifier,
    ) -> Result<SubmitReceipt> {
        let receipt = self.form.submit(service, notifier).await?;
        self.list.invalidate();
        self.refresh(service).await;
        Ok(receipt)
    }

    /// Change a record's status from the dashboard
    pub async fn change_status(
        &mut self,
        service: &dyn FeedbackService,
        id: &FeedbackId,
        status: StatusChoice,
    ) -> Result<()> {
        self.list.change_status(service, id, status).await
    }
}

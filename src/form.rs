//! Submission form controller
//!
//! Owns the draft, validates it, hands the built submission to a
//! [`FeedbackService`], and reports the outcome through a [`Notifier`].

use crate::api::{FeedbackService, SubmitReceipt};
use crate::draft::{DraftFeedback, FeedbackSubmission};
use crate::error::{Error, Result};
use async_trait::async_trait;
use tracing::{error, info};

/// Notifier trait for interface-agnostic submission feedback
///
/// - CLI implementations can print to the terminal
/// - A GUI can raise a dialog or toast
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Called after validation passes, right before the request is sent
    async fn on_submitting(&self, submission: &FeedbackSubmission);

    /// Called once the server accepted the submission
    async fn on_submitted(&self, receipt: &SubmitReceipt);

    /// Called when validation, transport, or the server fails
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op notifier for tests or when feedback isn't needed
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn on_submitting(&self, _submission: &FeedbackSubmission) {}
    async fn on_submitted(&self, _receipt: &SubmitReceipt) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}

/// The feedback form: a draft plus the submit workflow
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    /// Draft being edited
    pub draft: DraftFeedback,
}

impl SubmissionForm {
    /// Create a form with an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form around an existing draft
    pub const fn with_draft(draft: DraftFeedback) -> Self {
        Self { draft }
    }

    /// Build the request the current draft would send, without sending it
    pub fn preview(&self) -> Result<FeedbackSubmission> {
        Ok(self.draft.to_submission()?)
    }

    /// Validate and post the draft
    ///
    /// On success the draft is reset to its defaults. On any failure the
    /// draft is left untouched so the user can retry. Validation failures
    /// never reach the service.
    pub async fn submit(
        &mut self,
        service: &dyn FeedbackService,
        notifier: &dyn Notifier,
    ) -> Result<SubmitReceipt> {
        let submission = match self.draft.to_submission() {
            Ok(submission) => submission,
            Err(e) => {
                let err = Error::from(e);
                notifier.on_error(&err).await;
                return Err(err);
            }
        };

        notifier.on_submitting(&submission).await;

        match service.submit_feedback(&submission).await {
            Ok(receipt) => {
                info!(status = receipt.status, "feedback submitted");
                self.draft.reset();
                notifier.on_submitted(&receipt).await;
                Ok(receipt)
            }
            Err(e) => {
                error!(error = %e, "error submitting feedback");
                notifier.on_error(&e).await;
                Err(e)
            }
        }
    }
}

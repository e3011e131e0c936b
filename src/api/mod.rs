//! Feedback API access
//!
//! Provides a single interface over the feedback endpoints so the form and
//! list controllers can run against the real service or a test double.

mod http;
mod normalize;

pub use http::HttpFeedbackService;
pub use normalize::{normalize_body, normalize_records};

use crate::draft::FeedbackSubmission;
use crate::error::Result;
use crate::types::{FeedbackId, FeedbackRecord, StatusChoice};
use async_trait::async_trait;
use serde_json::Value;

/// Server acknowledgement of a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    /// HTTP status code (2xx)
    pub status: u16,
    /// Parsed response body, if it was JSON
    pub body: Option<Value>,
}

impl SubmitReceipt {
    /// Record id, if the server echoed one back
    pub fn record_id(&self) -> Option<FeedbackId> {
        let body = self.body.as_ref()?;
        let id = body
            .get("id")
            .or_else(|| body.get("_id"))
            .or_else(|| body.get("data").and_then(|d| d.get("id")))?;
        serde_json::from_value(id.clone()).ok()
    }
}

/// Feedback service trait
///
/// One method per endpoint operation. Implementations perform exactly one
/// request per call with no retries.
#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// POST a submission to the collection endpoint
    async fn submit_feedback(&self, submission: &FeedbackSubmission) -> Result<SubmitReceipt>;

    /// GET the collection, normalized to a list of records
    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>>;

    /// PATCH the status of a single record
    async fn update_status(&self, id: &FeedbackId, status: StatusChoice) -> Result<()>;
}

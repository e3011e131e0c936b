//! Mock feedback service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use clarity360::api::{FeedbackService, SubmitReceipt};
use clarity360::draft::FeedbackSubmission;
use clarity360::error::{Error, Result};
use clarity360::types::{FeedbackId, FeedbackRecord, StatusChoice};
use serde_json::json;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for `update_status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatusCall {
    pub id: FeedbackId,
    pub status: StatusChoice,
}

/// Simple mock feedback service
///
/// Features:
/// - Auto-incrementing ids for accepted submissions
/// - Call tracking for verification
/// - Configurable list response
/// - Error injection for failure path testing
pub struct MockFeedbackService {
    next_id: AtomicU64,
    list_response: Mutex<Vec<FeedbackRecord>>,
    // Call tracking
    submit_calls: Mutex<Vec<FeedbackSubmission>>,
    list_calls: AtomicU64,
    update_calls: Mutex<Vec<UpdateStatusCall>>,
    // Error injection
    error_on_submit: Mutex<Option<u16>>,
    error_on_list: Mutex<Option<u16>>,
    error_on_update: Mutex<Option<u16>>,
}

impl Default for MockFeedbackService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFeedbackService {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            list_response: Mutex::new(Vec::new()),
            submit_calls: Mutex::new(Vec::new()),
            list_calls: AtomicU64::new(0),
            update_calls: Mutex::new(Vec::new()),
            error_on_submit: Mutex::new(None),
            error_on_list: Mutex::new(None),
            error_on_update: Mutex::new(None),
        }
    }

    /// Create a mock whose list endpoint returns `records`
    pub fn with_records(records: Vec<FeedbackRecord>) -> Self {
        let mock = Self::new();
        mock.set_list_response(records);
        mock
    }

    // === Response configuration ===

    pub fn set_list_response(&self, records: Vec<FeedbackRecord>) {
        *self.list_response.lock().unwrap() = records;
    }

    // === Error injection methods ===

    /// Make `submit_feedback` fail with the given HTTP status
    pub fn fail_submit(&self, status: u16) {
        *self.error_on_submit.lock().unwrap() = Some(status);
    }

    /// Make `list_feedback` fail with the given HTTP status
    pub fn fail_list(&self, status: u16) {
        *self.error_on_list.lock().unwrap() = Some(status);
    }

    /// Make `update_status` fail with the given HTTP status
    pub fn fail_update(&self, status: u16) {
        *self.error_on_update.lock().unwrap() = Some(status);
    }

    /// Clear every injected error
    pub fn recover(&self) {
        *self.error_on_submit.lock().unwrap() = None;
        *self.error_on_list.lock().unwrap() = None;
        *self.error_on_update.lock().unwrap() = None;
    }

    // === Call verification methods ===

    pub fn get_submit_calls(&self) -> Vec<FeedbackSubmission> {
        self.submit_calls.lock().unwrap().clone()
    }

    pub fn list_call_count(&self) -> u64 {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_update_calls(&self) -> Vec<UpdateStatusCall> {
        self.update_calls.lock().unwrap().clone()
    }

    /// Assert that `update_status` was called with specific args
    pub fn assert_update_called(&self, id: &FeedbackId, status: StatusChoice) {
        let calls = self.get_update_calls();
        assert!(
            calls.iter().any(|c| &c.id == id && c.status == status),
            "Expected update_status({id}, {status}) but got: {calls:?}"
        );
    }
}

fn server_error(status: u16) -> Error {
    Error::Server {
        status,
        body: "injected failure".to_string(),
    }
}

#[async_trait]
impl FeedbackService for MockFeedbackService {
    async fn submit_feedback(&self, submission: &FeedbackSubmission) -> Result<SubmitReceipt> {
        self.submit_calls.lock().unwrap().push(submission.clone());

        if let Some(status) = *self.error_on_submit.lock().unwrap() {
            return Err(server_error(status));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(SubmitReceipt {
            status: 201,
            body: Some(json!({ "id": id, "status": "pending" })),
        })
    }

    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = *self.error_on_list.lock().unwrap() {
            return Err(server_error(status));
        }

        Ok(self.list_response.lock().unwrap().clone())
    }

    async fn update_status(&self, id: &FeedbackId, status: StatusChoice) -> Result<()> {
        self.update_calls.lock().unwrap().push(UpdateStatusCall {
            id: id.clone(),
            status,
        });

        if let Some(code) = *self.error_on_update.lock().unwrap() {
            return Err(server_error(code));
        }

        Ok(())
    }
}

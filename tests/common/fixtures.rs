//! Test data factories for clarity360 types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use clarity360::draft::{Attachment, DraftFeedback};
use clarity360::types::{ConcernType, Department, FeedbackId, FeedbackRecord};
use std::path::Path;
use tempfile::TempDir;

/// Create a record with the given id, status and urgency
pub fn make_record(id: u64, status: &str, urgency: &str) -> FeedbackRecord {
    FeedbackRecord {
        id: FeedbackId::Number(id),
        concern_type: Some(ConcernType::Complaint.label().to_string()),
        department: Some(Department::Operations.label().to_string()),
        description: Some(format!("Feedback number {id} with enough detail")),
        summary: None,
        suggested_action: None,
        status: Some(status.to_string()),
        urgency: Some(urgency.to_string()),
        is_anonymous: false,
        submitted_by: Some("pat@example.com".to_string()),
        created_at: Some("2024-01-15T12:00:00Z".to_string()),
    }
}

/// Create a draft that passes validation
pub fn make_valid_draft() -> DraftFeedback {
    DraftFeedback {
        concern_type: Some(ConcernType::HealthAndSafety),
        department: Some(Department::Operations),
        description: "Forklift charging area has exposed wiring".to_string(),
        is_anonymous: true,
        ..DraftFeedback::new()
    }
}

/// Write a file into `dir` and select it as an attachment
pub fn make_attachment(dir: &TempDir, name: &str, contents: &[u8]) -> Attachment {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    Attachment::from_path(&path).unwrap()
}

/// Attachment pointing at a path that does not need to exist
pub fn make_virtual_attachment(name: &str, size: u64) -> Attachment {
    Attachment {
        path: Path::new("/nonexistent").join(name),
        file_name: name.to_string(),
        size,
    }
}

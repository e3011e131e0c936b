//! Feedback card rendering

use crate::cli::style::{self, DOT, Stylize};
use clarity360::badge::{Badge, status_badge, urgency_badge};
use clarity360::types::FeedbackRecord;
use std::fmt::Write;

/// Longest description shown on a card before it is cut
const MAX_DESCRIPTION_CHARS: usize = 280;

/// Render one record as a multi-line card
///
/// With `styled` off the output is plain text, badges shown as `[label]`.
pub fn render_card(record: &FeedbackRecord, styled: bool) -> String {
    let paint_badge = |b: &Badge| {
        if styled {
            style::badge(b).to_string()
        } else {
            format!("[{}]", b.label)
        }
    };
    let paint_muted = |s: &str| {
        if styled {
            s.muted().to_string()
        } else {
            s.to_string()
        }
    };

    let mut out = String::new();

    let id = format!("#{}", record.id);
    let concern = non_empty(record.concern_type.as_deref()).unwrap_or("Uncategorized");
    if styled {
        let _ = write!(out, "{}  {}", id.accent(), concern.emphasis());
    } else {
        let _ = write!(out, "{id}  {concern}");
    }
    if let Some(department) = non_empty(record.department.as_deref()) {
        let _ = write!(out, " {} {}", paint_muted(DOT), department);
    }

    let _ = write!(
        out,
        "\n    {} {}",
        paint_badge(&status_badge(record.status_str())),
        paint_badge(&urgency_badge(record.urgency_str()))
    );
    if record.is_anonymous {
        let _ = write!(out, " {} {}", paint_muted(DOT), paint_muted("Anonymous"));
    } else if let Some(who) = non_empty(record.submitted_by.as_deref()) {
        let _ = write!(out, " {} {}", paint_muted(DOT), who);
    }
    if let Some(created) = record.created_at_display() {
        let _ = write!(out, " {} {}", paint_muted(DOT), paint_muted(created.as_str()));
    }

    if let Some(description) = non_empty(record.description.as_deref()) {
        let _ = write!(out, "\n    {}", truncate(description, MAX_DESCRIPTION_CHARS));
    }
    if let Some(summary) = non_empty(record.summary.as_deref()) {
        let _ = write!(out, "\n    {} {summary}", paint_muted("Summary:"));
    }
    if let Some(action) = non_empty(record.suggested_action.as_deref()) {
        let _ = write!(out, "\n    {} {action}", paint_muted("Suggested action:"));
    }

    out
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Truncate on a char boundary, appending `...` when cut
fn truncate(text: &str, max: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() > max {
        format!(
            "{}...",
            single_line.chars().take(max - 3).collect::<String>()
        )
    } else {
        single_line
    }
}

//! CLI notifier with a spinner and styled result lines

use crate::cli::style::{Stylize, check, cross, spinner_style};
use anstream::{eprintln, println};
use async_trait::async_trait;
use clarity360::api::SubmitReceipt;
use clarity360::draft::FeedbackSubmission;
use clarity360::error::Error;
use clarity360::form::Notifier;
use indicatif::ProgressBar;
use std::time::Duration;

/// Notifier that reports submission progress on the terminal
pub struct CliNotifier {
    spinner: ProgressBar,
}

impl CliNotifier {
    /// Create a notifier; the spinner stays hidden until a request starts
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        Self { spinner }
    }
}

impl Default for CliNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for CliNotifier {
    async fn on_submitting(&self, submission: &FeedbackSubmission) {
        let files = submission.attachments.len();
        let msg = if files == 0 {
            "Submitting feedback...".to_string()
        } else {
            format!(
                "Submitting feedback with {files} attachment{}...",
                if files == 1 { "" } else { "s" }
            )
        };
        self.spinner.set_message(msg);
        self.spinner.enable_steady_tick(Duration::from_millis(80));
    }

    async fn on_submitted(&self, receipt: &SubmitReceipt) {
        self.spinner.finish_and_clear();
        match receipt.record_id() {
            Some(id) => println!(
                "{} Feedback submitted successfully! {}",
                check(),
                format!("(#{id})").muted()
            ),
            None => println!("{} Feedback submitted successfully!", check()),
        }
    }

    async fn on_error(&self, err: &Error) {
        self.spinner.finish_and_clear();
        if err.is_remote() {
            eprintln!(
                "{} {}",
                cross(),
                "Error submitting feedback. Please try again.".error()
            );
            eprintln!("  {}", err.to_string().muted().for_stderr());
        } else {
            eprintln!("{} {}", cross(), err.to_string().error());
        }
    }

    async fn on_message(&self, message: &str) {
        self.spinner.suspend(|| println!("{message}"));
    }
}

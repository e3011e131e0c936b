//! List command - show submitted feedback as cards

use crate::cli::render::render_card;
use crate::cli::style::{Stylize, cross, spinner_style};
use anstream::{eprintln, println};
use anyhow::{Result, bail};
use clarity360::api::{FeedbackService, HttpFeedbackService};
use clarity360::config::ClientConfig;
use clarity360::list::ListState;
use clarity360::types::FeedbackRecord;
use clarity360::view::{Session, View};
use indicatif::ProgressBar;
use std::time::Duration;

/// Load the dashboard with a spinner while the request is in flight
pub async fn load_dashboard(session: &mut Session, service: &dyn FeedbackService) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message("Loading submissions...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    session.show(View::Dashboard, service).await;

    spinner.finish_and_clear();
}

/// Run the list command
pub async fn run_list(config: ClientConfig, json: bool, status: Option<&str>) -> Result<()> {
    let service = HttpFeedbackService::new(config)?;
    let mut session = Session::new();
    load_dashboard(&mut session, &service).await;

    let records: Vec<&FeedbackRecord> = match session.list.state() {
        ListState::Failed(msg) => {
            eprintln!("{} {}", cross(), msg.error());
            eprintln!("  {}", "Retry with `clarity list`.".warn());
            bail!("could not load submissions");
        }
        ListState::Loaded(_) => match status {
            Some(status) => session.list.records_with_status(status).collect(),
            None => session.list.records().iter().collect(),
        },
        ListState::Empty | ListState::Idle | ListState::Loading => Vec::new(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        let msg = if status.is_some() && !session.list.records().is_empty() {
            "No submissions with that status."
        } else {
            "No submissions yet."
        };
        println!("{}", msg.muted());
        println!(
            "{}",
            "Submit feedback with: clarity submit --description \"...\"".muted()
        );
        return Ok(());
    }

    println!("{}", "Submissions".emphasis());
    println!();
    for record in &records {
        println!("{}", render_card(record, true));
        println!();
    }
    println!(
        "{} submission{}",
        records.len().accent(),
        if records.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

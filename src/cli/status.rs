//! Status command - change the status of one submission

use crate::cli::list::load_dashboard;
use crate::cli::render::render_card;
use crate::cli::style::{Stylize, check, cross};
use anstream::{eprintln, println};
use anyhow::{Result, bail};
use clarity360::api::HttpFeedbackService;
use clarity360::config::ClientConfig;
use clarity360::list::ListState;
use clarity360::types::{FeedbackId, StatusChoice};
use clarity360::view::Session;

/// Run the status command
pub async fn run_status(config: ClientConfig, id: &str, status: &str) -> Result<()> {
    // Reject bad values before touching the network
    let status: StatusChoice = status.parse()?;
    let id = FeedbackId::from(id);

    let service = HttpFeedbackService::new(config)?;
    let mut session = Session::new();
    load_dashboard(&mut session, &service).await;

    if let ListState::Failed(msg) = session.list.state() {
        eprintln!("{} {}", cross(), msg.error());
        bail!("could not load submissions");
    }

    let previous = session
        .list
        .find(&id)
        .map(|r| r.status_str().to_string());

    if let Err(e) = session.change_status(&service, &id, status).await {
        eprintln!(
            "{} Failed to update #{} to {}",
            cross(),
            id.to_string().accent().for_stderr(),
            status.wire_value().accent().for_stderr()
        );
        return Err(e.into());
    }

    println!(
        "{} #{} {} {} {}",
        check(),
        id.accent(),
        previous.as_deref().unwrap_or("pending").muted(),
        "→".muted(),
        status.wire_value().emphasis()
    );
    if let Some(record) = session.list.find(&id) {
        println!();
        println!("{}", render_card(record, true));
    }

    Ok(())
}

//! Submit command - send a piece of feedback

use crate::cli::notify::CliNotifier;
use crate::cli::style::{Stylize, cross};
use anstream::{eprintln, println};
use anyhow::{Context, Result};
use clarity360::api::HttpFeedbackService;
use clarity360::config::ClientConfig;
use clarity360::draft::{
    Attachment, DraftFeedback, MAX_ATTACHMENTS, MIN_DESCRIPTION_CHARS, accepted_extensions,
};
use clarity360::form::{Notifier, SubmissionForm};
use clarity360::types::{ConcernType, Department};
use clarity360::view::Session;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Arguments for the submit command
#[derive(Debug, Default)]
pub struct SubmitArgs {
    /// Concern type label or slug
    pub concern_type: Option<String>,
    /// Department label or slug
    pub department: Option<String>,
    /// Description text
    pub description: Option<String>,
    /// Files to attach
    pub attachments: Vec<PathBuf>,
    /// Submit anonymously
    pub anonymous: bool,
    /// Validate and show the request without sending it
    pub dry_run: bool,
}

/// Run the submit command
///
/// When no description is given and stdin is a terminal, every field is
/// collected interactively and a failed submit can be retried without
/// re-entering anything.
pub async fn run_submit(config: ClientConfig, args: SubmitArgs) -> Result<()> {
    let interactive = args.description.is_none() && std::io::stdin().is_terminal();

    let mut draft = draft_from_args(&args)?;
    if interactive {
        prompt_draft(&mut draft)?;
    }

    let notifier = CliNotifier::new();

    if args.dry_run {
        let form = SubmissionForm::with_draft(draft);
        let submission = match form.preview() {
            Ok(submission) => submission,
            Err(e) => {
                notifier.on_error(&e).await;
                return Err(e.into());
            }
        };

        notifier
            .on_message(&format!(
                "{} would POST to {}",
                "Dry run:".emphasis(),
                config.collection_url()?.accent()
            ))
            .await;
        for (name, value) in &submission.fields {
            notifier
                .on_message(&format!("  {} = {value:?}", name.muted()))
                .await;
        }
        for file in &submission.attachments {
            notifier
                .on_message(&format!(
                    "  {} = {} ({} bytes)",
                    "attachments".muted(),
                    file.file_name,
                    file.size
                ))
                .await;
        }
        return Ok(());
    }

    let service = HttpFeedbackService::new(config)?;
    let mut session = Session::new();
    session.form.draft = draft;

    loop {
        match session.submit(&service, &notifier).await {
            Ok(_) => return Ok(()),
            Err(e) if interactive && e.is_remote() => {
                let retry = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt("Your draft was kept. Retry?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Err(e.into());
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn draft_from_args(args: &SubmitArgs) -> Result<DraftFeedback> {
    let mut draft = DraftFeedback::new();

    draft.concern_type = args
        .concern_type
        .as_deref()
        .map(str::parse::<ConcernType>)
        .transpose()
        .context("run `clarity catalog` to see accepted concern types")?;
    draft.department = args
        .department
        .as_deref()
        .map(str::parse::<Department>)
        .transpose()
        .context("run `clarity catalog` to see accepted departments")?;
    draft.description = args.description.clone().unwrap_or_default();
    draft.is_anonymous = args.anonymous;

    let files = args
        .attachments
        .iter()
        .map(|path| {
            Attachment::from_path(path)
                .with_context(|| format!("cannot attach {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    draft.add_attachments(files);

    Ok(draft)
}

fn prompt_draft(draft: &mut DraftFeedback) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!("{}", "Submit Feedback".emphasis());
    println!(
        "{}",
        "Only a description is required; other fields help route your feedback.".muted()
    );
    println!();

    if draft.concern_type.is_none() {
        let mut items = vec!["(skip)"];
        items.extend(ConcernType::ALL.iter().map(|c| c.label()));
        let choice = Select::with_theme(&theme)
            .with_prompt("Concern type (optional)")
            .items(&items)
            .default(0)
            .interact()?;
        draft.concern_type = choice.checked_sub(1).map(|i| ConcernType::ALL[i]);
    }

    if draft.department.is_none() {
        let mut items = vec!["(skip)"];
        items.extend(Department::ALL.iter().map(|d| d.label()));
        let choice = Select::with_theme(&theme)
            .with_prompt("Related department (optional)")
            .items(&items)
            .default(0)
            .interact()?;
        draft.department = choice.checked_sub(1).map(|i| Department::ALL[i]);
    }

    draft.description = Input::<String>::with_theme(&theme)
        .with_prompt("Description")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            let len = input.trim().chars().count();
            if len >= MIN_DESCRIPTION_CHARS {
                Ok(())
            } else {
                Err(format!(
                    "Minimum {MIN_DESCRIPTION_CHARS} characters required ({len} so far)"
                ))
            }
        })
        .interact_text()?;

    loop {
        if draft.attachments().len() >= MAX_ATTACHMENTS {
            break;
        }
        let path: String = Input::with_theme(&theme)
            .with_prompt(format!(
                "Attach a file ({}; blank to continue)",
                accepted_extensions()
            ))
            .allow_empty(true)
            .interact_text()?;
        let path = path.trim();
        if path.is_empty() {
            break;
        }
        match Attachment::from_path(path) {
            Ok(file) => draft.add_attachments([file]),
            Err(e) => eprintln!("{} cannot attach {path}: {}", cross(), e.to_string().error()),
        }
    }

    if !draft.attachments().is_empty() {
        let names: Vec<&str> = draft
            .attachments()
            .iter()
            .map(|a| a.file_name.as_str())
            .collect();
        let remove = Select::with_theme(&theme)
            .with_prompt("Remove an attachment?")
            .item("(keep all)")
            .items(&names)
            .default(0)
            .interact()?;
        if let Some(index) = remove.checked_sub(1) {
            draft.remove_attachment(index);
        }
    }

    draft.is_anonymous = Confirm::with_theme(&theme)
        .with_prompt("Submit anonymously?")
        .default(draft.is_anonymous)
        .interact()?;

    Ok(())
}

//! clarity - workplace feedback from the terminal
//!
//! CLI binary for submitting feedback and triaging submissions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use clarity360::config::ClientConfig;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;

#[derive(Parser)]
#[command(name = "clarity")]
#[command(about = "Submit workplace feedback and triage submissions")]
#[command(version)]
struct Cli {
    /// Base URL of the feedback API (defaults to $CLARITY_API_URL or http://localhost:3000)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds (defaults to $CLARITY_TIMEOUT_SECS or 30)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit feedback (prompts for fields when no description is given)
    Submit {
        /// Concern type, by label or short name (see `clarity catalog`)
        #[arg(long)]
        concern_type: Option<String>,

        /// Related department, by label or short name (see `clarity catalog`)
        #[arg(long)]
        department: Option<String>,

        /// Description of the concern (at least 10 characters)
        #[arg(short, long)]
        description: Option<String>,

        /// File to attach; repeat for more files
        #[arg(short, long = "attach", value_name = "FILE")]
        attach: Vec<PathBuf>,

        /// Hide your identity from reviewers
        #[arg(long)]
        anonymous: bool,

        /// Dry run - validate and show the request without sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// List submitted feedback
    List {
        /// Print records as JSON
        #[arg(long)]
        json: bool,

        /// Only show records with this status
        #[arg(long)]
        status: Option<String>,
    },

    /// Change the status of a submission
    Status {
        /// Submission id
        id: String,

        /// New status: pending, "In Progress", Resolved, or closed
        status: String,
    },

    /// Show accepted concern types, departments and statuses
    Catalog,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "clarity360=debug,clarity=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Submit {
            concern_type,
            department,
            description,
            attach,
            anonymous,
            dry_run,
        } => {
            let config = ClientConfig::resolve(cli.api_url.as_deref(), cli.timeout)?;
            let args = cli::SubmitArgs {
                concern_type,
                department,
                description,
                attachments: attach,
                anonymous,
                dry_run,
            };
            cli::run_submit(config, args).await?;
        }
        Commands::List { json, status } => {
            let config = ClientConfig::resolve(cli.api_url.as_deref(), cli.timeout)?;
            cli::run_list(config, json, status.as_deref()).await?;
        }
        Commands::Status { id, status } => {
            let config = ClientConfig::resolve(cli.api_url.as_deref(), cli.timeout)?;
            cli::run_status(config, &id, &status).await?;
        }
        Commands::Catalog => cli::run_catalog(),
    }

    Ok(())
}

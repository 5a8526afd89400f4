use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{builder::styling, Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

use idkit_client::{IdkitClientConfig, IdkitClientService, ServiceAccount};
use idkit_core::logging::ConsoleAuditLogger;
use idkit_core::IdentityAdmin;

mod commands;
use commands::{apply_claim, show_user, ClaimOp};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "claimctl: administer identity-platform custom claims",
    long_about = "An administrative tool that grants, revokes and inspects custom claims on identity-platform user accounts, authenticating with a service-account credential.",
    styles = STYLES
)]
struct Args {
    #[command(subcommand)]
    command: Cmd,

    #[arg(
        short,
        long,
        default_value = "service-account.json",
        help = "Path to the service-account credential file"
    )]
    credentials: String,

    #[arg(
        short,
        long,
        help = "Project to target when running against a local Auth emulator"
    )]
    project: Option<String>,

    #[arg(
        short,
        long,
        default_value_t = false,
        help = "Skip the confirmation prompt before mutating an account"
    )]
    yes: bool,

    #[arg(
        short,
        long,
        default_value_t = false,
        help = "Print audit log lines for every request and response"
    )]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Grant the admin claim to one account
    Grant {
        #[arg(help = "Target user identifier (localId)")]
        uid: String,
    },
    /// Clear the admin claim on one account
    Revoke {
        #[arg(help = "Target user identifier (localId)")]
        uid: String,
    },
    /// Show an account and its current custom claims
    Show {
        #[arg(help = "Target user identifier (localId)")]
        uid: String,
    },
}

struct App {
    client: Box<dyn IdentityAdmin>,
    yes: bool,
}

impl App {
    fn new(args: &Args) -> Result<Self> {
        let mut config = IdkitClientConfig::default();

        if args.verbose {
            config.logger = Some(Arc::new(ConsoleAuditLogger));
        }

        if let Ok(url) = std::env::var("IDKIT_API_URL") {
            config.gcip_api_url = Some(url);
        }

        if let Ok(host) = std::env::var("AUTH_EMULATOR_HOST") {
            config.emulator_host = Some(host);
            config.emulator_project = args.project.clone();
        } else {
            // Startup fault: a missing or malformed credential aborts here,
            // before any request is issued.
            let account =
                ServiceAccount::from_file(&args.credentials).map_err(|e| anyhow::anyhow!("{e}"))?;
            config.gcip_sa = Some(account);
        }

        Ok(Self {
            client: Box::new(IdkitClientService::new(config)),
            yes: args.yes,
        })
    }

    async fn run(&self, command: &Cmd) -> Result<()> {
        match command {
            Cmd::Grant { uid } => self.mutate(ClaimOp::Grant, uid).await,
            Cmd::Revoke { uid } => self.mutate(ClaimOp::Revoke, uid).await,
            Cmd::Show { uid } => self.show(uid).await,
        }
    }

    async fn mutate(&self, op: ClaimOp, uid: &str) -> Result<()> {
        let payload = op
            .payload()
            .to_wire_string()
            .map_err(|e| anyhow::anyhow!("{e}"))?;

        if !self.yes {
            let prompt = format!(
                "Apply custom claims {} to account {}?",
                payload.cyan(),
                uid.cyan().bold()
            );
            if !Confirm::new().with_prompt(prompt).interact()? {
                println!("{}", "Cancelled.".bright_yellow());
                return Ok(());
            }
        }

        let pb = spinner("Contacting identity platform...")?;
        let result = apply_claim(self.client.as_ref(), op, uid).await;
        pb.finish_and_clear();

        match result {
            Ok(message) => {
                println!("{}", message.bright_green());
                Ok(())
            }
            Err(e) => fail(&e),
        }
    }

    async fn show(&self, uid: &str) -> Result<()> {
        let pb = spinner("Contacting identity platform...")?;
        let result = show_user(self.client.as_ref(), uid).await;
        pb.finish_and_clear();

        match result {
            Ok(rendered) => {
                print!("{}", rendered);
                Ok(())
            }
            Err(e) => fail(&e),
        }
    }
}

/// Remote-call fault: log the message text and terminate cleanly with code 1.
fn fail(error: &idkit_core::BoxError) -> Result<()> {
    eprintln!("{} {}", "Error:".bright_red().bold(), error);
    std::process::exit(1);
}

fn spinner(message: &'static str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.green} {msg}")?,
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let app = App::new(&args)?;
    app.run(&args.command).await
}

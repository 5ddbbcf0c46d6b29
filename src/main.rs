//! atlctl - Main entry point

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{debug, info};

use atlctl::atlassian::{print_scheme_dry_run, print_space_dry_run};
use atlctl::cli::{SchemeAction, SpaceAction};
use atlctl::{
    run_group_command, run_project_command, run_role_command, run_scheme_command,
    run_space_command, AtlassianClient, Cli, Command, CredentialResolver, Result, SiteResolver,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting atlctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: command={:?}, output={}, batch={}, timeout={}",
        cli.command, cli.output, cli.batch, cli.timeout
    );

    let result = run(&cli).await;
    log::logger().flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    if cli.command.is_dry_run() {
        return run_dry_run(cli);
    }

    let client = build_client(cli)?;

    match &cli.command {
        Command::Group { action } => run_group_command(&client, cli, action).await,
        Command::Project { action } => run_project_command(&client, cli, action).await,
        Command::Role { action } => run_role_command(&client, cli, action).await,
        Command::Scheme { action } => run_scheme_command(&client, cli, action).await,
        Command::Space { action } => run_space_command(&client, cli, action).await,
    }
}

/// Render payloads without resolving credentials or touching the network
fn run_dry_run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Scheme {
            action: SchemeAction::Create(args),
        } => print_scheme_dry_run(args, cli.output),
        Command::Space {
            action: SpaceAction::Create(args),
        } => print_space_dry_run(args, cli.output),
        _ => Ok(()),
    }
}

fn build_client(cli: &Cli) -> Result<AtlassianClient> {
    // Resolve credentials and sites with fallback logic
    let credentials = CredentialResolver::new().resolve(cli.email.as_deref(), cli.token.as_deref())?;
    let sites = SiteResolver::new().resolve(cli.jira_host.as_deref(), cli.confluence_host.as_deref())?;
    debug!("Using Jira at {} and Confluence at {}", sites.jira, sites.confluence);

    AtlassianClient::new(credentials, sites, Duration::from_secs(cli.timeout))
}

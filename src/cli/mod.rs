//! CLI argument parsing

mod common;
mod grants;
mod group;
mod project;
mod role;
mod scheme;
mod space;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use grants::{parse_operation, GrantArg};
pub use group::GroupAction;
pub use project::ProjectAction;
pub use role::RoleAction;
pub use scheme::{SchemeAction, SchemeCreateArgs};
pub use space::{SpaceAction, SpaceCreateArgs};

/// Jira/Confluence provisioning CLI
#[derive(Parser, Debug)]
#[command(name = "atlctl")]
#[command(version)]
#[command(
    about = "Provision Jira and Confluence Cloud groups, projects, permission schemes and spaces",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Atlassian account email (overrides env vars and credentials file)
    #[arg(short = 'e', long, global = true)]
    pub email: Option<String>,

    /// Atlassian API token (overrides env vars and credentials file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Jira host, e.g. acme.atlassian.net
    #[arg(long, global = true)]
    pub jira_host: Option<String>,

    /// Confluence host, e.g. acme.atlassian.net/wiki
    #[arg(long, global = true)]
    pub confluence_host: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(
        short,
        long,
        global = true,
        env = "ATLCTL_LOG_LEVEL",
        default_value = defaults::LOG_LEVEL
    )]
    pub log_level: String,

    /// Request timeout in seconds (at least 1)
    #[arg(
        long,
        global = true,
        default_value_t = defaults::TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Output format for responses and dry-run payloads
    #[arg(short = 'o', long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Batch mode: no spinners and no confirmation prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage Jira groups and their members
    #[command(visible_alias = "groups")]
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },

    /// Manage Jira projects
    #[command(visible_alias = "projects", visible_alias = "prj")]
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage Jira project roles and role actors
    #[command(visible_alias = "roles")]
    Role {
        #[command(subcommand)]
        action: RoleAction,
    },

    /// Manage Jira permission schemes
    #[command(visible_alias = "schemes", visible_alias = "permission-scheme")]
    Scheme {
        #[command(subcommand)]
        action: SchemeAction,
    },

    /// Manage Confluence spaces and their permissions
    #[command(visible_alias = "spaces")]
    Space {
        #[command(subcommand)]
        action: SpaceAction,
    },
}

impl Command {
    /// Dry-run commands render payloads without touching the network
    pub fn is_dry_run(&self) -> bool {
        match self {
            Command::Scheme {
                action: SchemeAction::Create(args),
            } => args.dry_run,
            Command::Space {
                action: SpaceAction::Create(args),
            } => args.dry_run,
            _ => false,
        }
    }
}

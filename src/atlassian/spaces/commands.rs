//! Space command handlers

use log::debug;

use crate::atlassian::helpers::{report_response, subjects};
use crate::atlassian::AtlassianClient;
use crate::cli::{Cli, OutputFormat, SpaceAction, SpaceCreateArgs};
use crate::error::Result;
use crate::output::output_space_request;
use crate::permissions::{SpacePermissions, SubjectType};
use crate::ui::{confirm_action, create_spinner};

use super::models::CreateSpaceRequest;

/// Run a 'space' subcommand
pub async fn run_space_command(
    client: &AtlassianClient,
    cli: &Cli,
    action: &SpaceAction,
) -> Result<()> {
    match action {
        SpaceAction::Create(args) => {
            let permissions = build_space_permissions(args);
            if permissions.is_empty() {
                debug!("No grants given, Confluence default permissions apply");
            }
            let spinner = create_spinner(&format!("Creating space '{}'...", args.key), cli.batch);
            let result = client
                .create_space(&args.name, &args.key, &args.description, &permissions)
                .await;
            report_response(result, spinner, cli.output)
        }
        SpaceAction::Delete { key, yes } => {
            let prompt = format!("Delete space '{}' and all of its content?", key);
            if !confirm_action(&prompt, *yes || cli.batch)? {
                println!("Cancelled");
                return Ok(());
            }
            let spinner = create_spinner(&format!("Deleting space '{}'...", key), cli.batch);
            report_response(client.delete_space(key).await, spinner, cli.output)
        }
    }
}

/// Print the request body 'space create' would send
pub fn print_space_dry_run(args: &SpaceCreateArgs, format: OutputFormat) -> Result<()> {
    let permissions = build_space_permissions(args);
    let request = CreateSpaceRequest::new(&args.name, &args.key, &args.description, &permissions);
    output_space_request(&request, format)
}

/// Accumulate space grants for every --user and --group argument
///
/// A subject's own preset wins; otherwise the explicit --operation list,
/// otherwise the --preset default.
pub fn build_space_permissions(args: &SpaceCreateArgs) -> SpacePermissions {
    let mut permissions = SpacePermissions::new();
    let subjects = subjects(SubjectType::User, &args.users)
        .chain(subjects(SubjectType::Group, &args.groups));

    for (subject, preset) in subjects {
        match preset {
            Some(preset) => permissions.add_preset(subject, args.size, preset),
            None if !args.operations.is_empty() => {
                permissions.add_grants(subject, args.size, args.operations.iter().cloned())
            }
            None => permissions.add_preset(subject, args.size, args.preset),
        };
    }
    permissions
}

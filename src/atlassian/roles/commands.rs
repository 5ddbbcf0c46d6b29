//! Project role command handlers

use log::warn;

use crate::atlassian::helpers::report_response;
use crate::atlassian::AtlassianClient;
use crate::cli::{Cli, RoleAction};
use crate::error::{AtlError, Result};
use crate::ui::{confirm_action, create_spinner};

/// Run a 'role' subcommand
pub async fn run_role_command(
    client: &AtlassianClient,
    cli: &Cli,
    action: &RoleAction,
) -> Result<()> {
    match action {
        RoleAction::Create { name, description } => {
            let spinner = create_spinner(&format!("Creating role '{}'...", name), cli.batch);
            let result = client.create_project_role(name, description).await;
            report_response(result, spinner, cli.output)
        }
        RoleAction::Delete { role_id, yes } => {
            let prompt = format!("Delete project role {}?", role_id);
            if !confirm_action(&prompt, *yes || cli.batch)? {
                println!("Cancelled");
                return Ok(());
            }
            let spinner = create_spinner(&format!("Deleting role {}...", role_id), cli.batch);
            report_response(client.delete_project_role(role_id).await, spinner, cli.output)
        }
        RoleAction::AddActors {
            project,
            role_id,
            groups,
            users,
        } => {
            if groups.is_empty() && users.is_empty() {
                warn!("No --group or --user given for role {}", role_id);
                return Err(AtlError::InvalidGrant(
                    "add-actors needs at least one --group or --user".to_string(),
                ));
            }
            let spinner = create_spinner(
                &format!("Adding actors to role {} in '{}'...", role_id, project),
                cli.batch,
            );
            let result = client
                .add_actors_to_project_role(project, role_id, groups, users)
                .await;
            report_response(result, spinner, cli.output)
        }
        RoleAction::RemoveUser {
            project,
            role_id,
            account_id,
        } => {
            let spinner = create_spinner(
                &format!("Removing {} from role {} in '{}'...", account_id, role_id, project),
                cli.batch,
            );
            let result = client
                .delete_user_from_project_role(project, role_id, account_id)
                .await;
            report_response(result, spinner, cli.output)
        }
        RoleAction::RemoveGroup {
            project,
            role_id,
            group_id,
        } => {
            let spinner = create_spinner(
                &format!("Removing group {} from role {} in '{}'...", group_id, role_id, project),
                cli.batch,
            );
            let result = client
                .delete_group_from_project_role(project, role_id, group_id)
                .await;
            report_response(result, spinner, cli.output)
        }
    }
}

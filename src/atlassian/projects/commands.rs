//! Project command handlers

use crate::atlassian::helpers::report_response;
use crate::atlassian::AtlassianClient;
use crate::cli::{Cli, ProjectAction};
use crate::error::Result;
use crate::ui::{confirm_action, create_spinner};

/// Run a 'project' subcommand
pub async fn run_project_command(
    client: &AtlassianClient,
    cli: &Cli,
    action: &ProjectAction,
) -> Result<()> {
    match action {
        ProjectAction::Create { name, key } => {
            let spinner = create_spinner(
                &format!("Creating scrum project '{}' ({})...", name, key),
                cli.batch,
            );
            let result = client.create_scrum_project(name, key).await;
            report_response(result, spinner, cli.output)
        }
        ProjectAction::AssignScheme { project, scheme_id } => {
            let spinner = create_spinner(
                &format!("Assigning scheme {} to '{}'...", scheme_id, project),
                cli.batch,
            );
            let result = client.assign_permission_scheme(project, *scheme_id).await;
            report_response(result, spinner, cli.output)
        }
        ProjectAction::Delete { project, yes } => {
            let prompt = format!("Delete project '{}' and all of its issues?", project);
            if !confirm_action(&prompt, *yes || cli.batch)? {
                println!("Cancelled");
                return Ok(());
            }
            let spinner = create_spinner(&format!("Deleting project '{}'...", project), cli.batch);
            report_response(client.delete_project(project).await, spinner, cli.output)
        }
    }
}

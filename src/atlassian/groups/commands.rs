//! Group command handlers

use crate::atlassian::helpers::report_response;
use crate::atlassian::AtlassianClient;
use crate::cli::{Cli, GroupAction};
use crate::error::Result;
use crate::ui::create_spinner;

/// Run a 'group' subcommand
pub async fn run_group_command(
    client: &AtlassianClient,
    cli: &Cli,
    action: &GroupAction,
) -> Result<()> {
    match action {
        GroupAction::Create { name } => {
            let spinner = create_spinner(&format!("Creating group '{}'...", name), cli.batch);
            report_response(client.create_group(name).await, spinner, cli.output)
        }
        GroupAction::AddUser {
            group_id,
            account_id,
        } => {
            let spinner = create_spinner(
                &format!("Adding {} to group {}...", account_id, group_id),
                cli.batch,
            );
            let result = client.add_user_to_group(group_id, account_id).await;
            report_response(result, spinner, cli.output)
        }
        GroupAction::RemoveUser {
            group_id,
            account_id,
        } => {
            let spinner = create_spinner(
                &format!("Removing {} from group {}...", account_id, group_id),
                cli.batch,
            );
            let result = client.remove_user_from_group(group_id, account_id).await;
            report_response(result, spinner, cli.output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_group_create_fails_on_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/api/3/group"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"errorMessages": ["Group exists"]})),
            )
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let cli = Cli::parse_from(["atlctl", "-b", "group", "create", "students"]);
        let crate::cli::Command::Group { action } = &cli.command else {
            panic!("expected group command");
        };

        let err = run_group_command(&client, &cli, action).await.unwrap_err();
        assert!(err.to_string().contains("Group exists"));
    }
}

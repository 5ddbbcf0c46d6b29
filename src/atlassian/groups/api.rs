//! Jira group API operations

use crate::atlassian::{AtlassianClient, ApiResponse};
use crate::config::api;
use crate::error::Result;

use super::models::{AddUserToGroupRequest, CreateGroupRequest};

impl AtlassianClient {
    /// Create a group
    ///
    /// <https://developer.atlassian.com/cloud/jira/platform/rest/v3/api-group-groups/#api-rest-api-3-group-post>
    pub async fn create_group(&self, name: &str) -> Result<ApiResponse> {
        let spec = self.jira()?.with_json(&CreateGroupRequest {
            name: name.to_string(),
        })?;
        self.post(
            spec,
            &format!("{}/group", api::JIRA_BASE_PATH),
            &format!("Creating a group with name {} in Jira.", name),
        )
        .await
    }

    /// Add a user to a group
    pub async fn add_user_to_group(&self, group_id: &str, account_id: &str) -> Result<ApiResponse> {
        let spec = self
            .jira()?
            .with_query("groupId", group_id)
            .with_json(&AddUserToGroupRequest {
                account_id: account_id.to_string(),
            })?;
        self.post(
            spec,
            &format!("{}/group/user", api::JIRA_BASE_PATH),
            &format!(
                "Adding user with account ID {} to group with ID {} in Jira.",
                account_id, group_id
            ),
        )
        .await
    }

    /// Remove a user from a group
    pub async fn remove_user_from_group(
        &self,
        group_id: &str,
        account_id: &str,
    ) -> Result<ApiResponse> {
        let spec = self
            .jira()?
            .with_queries([("groupId", group_id), ("accountId", account_id)]);
        self.delete(
            spec,
            &format!("{}/group/user", api::JIRA_BASE_PATH),
            &format!(
                "Removing user with account ID {} from group with ID {} in Jira.",
                account_id, group_id
            ),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::atlassian::AtlassianClient;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_group() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/api/3/group"))
            .and(body_json(json!({"name": "comp1000-students"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"name": "comp1000-students", "groupId": "g-1"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let response = client.create_group("comp1000-students").await.unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.json_or_empty()["groupId"], "g-1");
    }

    #[tokio::test]
    async fn test_add_user_to_group() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/api/3/group/user"))
            .and(query_param("groupId", "g-1"))
            .and(body_json(json!({"accountId": "712020:abc"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"name": "students"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let response = client.add_user_to_group("g-1", "712020:abc").await.unwrap();

        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_remove_user_from_group() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/rest/api/3/group/user"))
            .and(query_param("groupId", "g-1"))
            .and(query_param("accountId", "712020:abc"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let response = client
            .remove_user_from_group("g-1", "712020:abc")
            .await
            .unwrap();

        assert_eq!(response.status, 200);
    }
}

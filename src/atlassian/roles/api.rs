//! Jira project role API operations

use crate::atlassian::helpers::path_segment;
use crate::atlassian::{ApiResponse, AtlassianClient};
use crate::config::api;
use crate::error::Result;

use super::models::{AddActorsRequest, CreateRoleRequest};

impl AtlassianClient {
    /// Create a project role
    pub async fn create_project_role(&self, name: &str, description: &str) -> Result<ApiResponse> {
        let spec = self.jira()?.with_json(&CreateRoleRequest {
            name: name.to_string(),
            description: description.to_string(),
        })?;
        self.post(
            spec,
            &format!("{}/role", api::JIRA_BASE_PATH),
            &format!("Creating project role {}", name),
        )
        .await
    }

    /// Delete a project role
    pub async fn delete_project_role(&self, role_id: &str) -> Result<ApiResponse> {
        self.delete(
            self.jira()?,
            &format!("{}/role/{}", api::JIRA_BASE_PATH, path_segment(role_id)),
            &format!("Deleting project role {}", role_id),
        )
        .await
    }

    /// Add groups and/or users to a role in a project
    pub async fn add_actors_to_project_role(
        &self,
        project_id_or_key: &str,
        role_id: &str,
        group_ids: &[String],
        user_ids: &[String],
    ) -> Result<ApiResponse> {
        let spec = self.jira()?.with_json(&AddActorsRequest {
            group_ids: group_ids.to_vec(),
            user_ids: user_ids.to_vec(),
        })?;
        self.post(
            spec,
            &role_actors_path(project_id_or_key, role_id),
            &format!(
                "Assigning groups and/or users to role with ID {} in project with key/ID {}",
                role_id, project_id_or_key
            ),
        )
        .await
    }

    /// Remove a user from a role in a project
    pub async fn delete_user_from_project_role(
        &self,
        project_id_or_key: &str,
        role_id: &str,
        account_id: &str,
    ) -> Result<ApiResponse> {
        let spec = self.jira()?.with_query("user", account_id);
        self.delete(
            spec,
            &role_actors_path(project_id_or_key, role_id),
            &format!(
                "Deleting user {} from role with ID {} in project with key/ID {}",
                account_id, role_id, project_id_or_key
            ),
        )
        .await
    }

    /// Remove a group from a role in a project
    pub async fn delete_group_from_project_role(
        &self,
        project_id_or_key: &str,
        role_id: &str,
        group_id: &str,
    ) -> Result<ApiResponse> {
        let spec = self.jira()?.with_query("groupId", group_id);
        self.delete(
            spec,
            &role_actors_path(project_id_or_key, role_id),
            &format!(
                "Deleting group {} from role with ID {} in project with key/ID {}",
                group_id, role_id, project_id_or_key
            ),
        )
        .await
    }
}

fn role_actors_path(project_id_or_key: &str, role_id: &str) -> String {
    format!(
        "{}/project/{}/role/{}",
        api::JIRA_BASE_PATH,
        path_segment(project_id_or_key),
        path_segment(role_id)
    )
}

#[cfg(test)]
mod tests {
    use crate::atlassian::AtlassianClient;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_project_role() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/api/3/role"))
            .and(body_json(json!({"name": "Tutors", "description": "Course tutors"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 10360})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let response = client
            .create_project_role("Tutors", "Course tutors")
            .await
            .unwrap();

        assert_eq!(response.json_or_empty()["id"], 10360);
    }

    #[tokio::test]
    async fn test_delete_project_role() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/rest/api/3/role/10360"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let response = client.delete_project_role("10360").await.unwrap();

        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn test_add_actors_groups_only() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/api/3/project/COMP/role/10360"))
            .and(body_json(json!({"groupId": ["g1", "g2"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"actors": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let groups = vec!["g1".to_string(), "g2".to_string()];
        let response = client
            .add_actors_to_project_role("COMP", "10360", &groups, &[])
            .await
            .unwrap();

        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_delete_user_from_project_role() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/rest/api/3/project/COMP/role/10360"))
            .and(query_param("user", "712020:abc"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let response = client
            .delete_user_from_project_role("COMP", "10360", "712020:abc")
            .await
            .unwrap();

        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn test_role_actor_path_segments_encoded() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/rest/api/3/project/X%23Y/role/1%2F2"))
            .and(query_param("user", "u-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let response = client
            .delete_user_from_project_role("X#Y", "1/2", "u-1")
            .await
            .unwrap();

        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn test_delete_group_from_project_role() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/rest/api/3/project/COMP/role/10360"))
            .and(query_param("groupId", "g-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AtlassianClient::test_client(&mock_server.uri());
        let response = client
            .delete_group_from_project_role("COMP", "10360", "g-1")
            .await
            .unwrap();

        assert_eq!(response.status, 204);
    }
}

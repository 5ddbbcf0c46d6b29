//! Jira project API operations

use crate::atlassian::helpers::path_segment;
use crate::atlassian::{ApiResponse, AtlassianClient};
use crate::config::api;
use crate::error::Result;

use super::models::{AssignSchemeRequest, CreateProjectRequest};

impl AtlassianClient {
    /// Create a blank project based on the scrum classic template
    ///
    /// The key must be unique and at most 10 characters.
    pub async fn create_scrum_project(&self, name: &str, key: &str) -> Result<ApiResponse> {
        let spec = self
            .jira()?
            .with_json(&CreateProjectRequest::scrum(name, key))?;
        self.post(
            spec,
            &format!("{}/project", api::JIRA_BASE_PATH),
            &format!("Creating scrum project {}...", name),
        )
        .await
    }

    /// Assign a permission scheme to a project
    pub async fn assign_permission_scheme(
        &self,
        project_key_or_id: &str,
        scheme_id: u64,
    ) -> Result<ApiResponse> {
        let spec = self
            .jira()?
            .with_json(&AssignSchemeRequest { id: scheme_id })?;
        self.put(
            spec,
            &format!(
                "{}/project/{}/permissionscheme",
                api::JIRA_BASE_PATH,
                path_segment(project_key_or_id)
            ),
            &format!(
                "Assigning permission scheme with ID {} to project with key/ID {}",
                scheme_id, project_key_or_id
            ),
        )
        .await
    }

    /// Delete a project
    pub async fn delete_project(&self, project_key_or_id: &str) -> Result<ApiResponse> {
        self.delete(
            self.jira()?,
            &format!(
                "{}/project/{}",
                api::JIRA_BASE_PATH,
                path_segment(project_key_or_id)
            ),
            &format!("Deleting project with key/ID {}", project_key_or_id),
        )
        .await
    }
}

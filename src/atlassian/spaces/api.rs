//! Confluence space API operations

use crate::atlassian::helpers::path_segment;
use crate::atlassian::{ApiResponse, AtlassianClient};
use crate::config::api;
use crate::error::Result;
use crate::permissions::SpacePermissions;

use super::models::CreateSpaceRequest;

impl AtlassianClient {
    /// Create a space, with explicit permissions when any were granted
    ///
    /// <https://developer.atlassian.com/cloud/confluence/rest/v1/api-group-space/#api-wiki-rest-api-space-post>
    pub async fn create_space(
        &self,
        name: &str,
        key: &str,
        description: &str,
        permissions: &SpacePermissions,
    ) -> Result<ApiResponse> {
        let request = CreateSpaceRequest::new(name, key, description, permissions);
        let spec = self.confluence()?.with_json(&request)?;
        self.post(
            spec,
            &format!("{}/space", api::CONFLUENCE_BASE_PATH),
            &format!("Creating space {} in Confluence...", name),
        )
        .await
    }

    /// Delete a space
    ///
    /// Confluence answers 202 and removes the space in a background task.
    pub async fn delete_space(&self, key: &str) -> Result<ApiResponse> {
        self.delete(
            self.confluence()?,
            &format!("{}/space/{}", api::CONFLUENCE_BASE_PATH, path_segment(key)),
            &format!("Deleting space with key {} in Confluence...", key),
        )
        .await
    }
}

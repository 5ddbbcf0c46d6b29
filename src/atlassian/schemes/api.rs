//! Jira permission scheme API operations

use crate::atlassian::{ApiResponse, AtlassianClient};
use crate::config::api;
use crate::error::Result;
use crate::permissions::PermissionScheme;

impl AtlassianClient {
    /// Create a permission scheme from accumulated grants
    ///
    /// <https://developer.atlassian.com/cloud/jira/platform/rest/v3/api-group-permission-schemes/#api-rest-api-3-permissionscheme-post>
    pub async fn create_permission_scheme(
        &self,
        scheme: &PermissionScheme,
        name: &str,
        description: &str,
    ) -> Result<ApiResponse> {
        let spec = self.jira()?.with_json(&scheme.request(name, description))?;
        self.post(
            spec,
            &format!("{}/permissionscheme", api::JIRA_BASE_PATH),
            &format!("Creating permission scheme {}...", name),
        )
        .await
    }
}

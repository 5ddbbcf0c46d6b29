//! Jira project request models

use serde::Serialize;

use crate::config::api;

/// Body of POST /rest/api/3/project
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    pub key: String,
    pub project_template_key: String,
    pub project_type_key: String,
}

impl CreateProjectRequest {
    /// Blank software project on the scrum classic template
    pub fn scrum(name: &str, key: &str) -> Self {
        Self {
            name: name.to_string(),
            key: key.to_string(),
            project_template_key: api::SCRUM_TEMPLATE_KEY.to_string(),
            project_type_key: api::SOFTWARE_PROJECT_TYPE.to_string(),
        }
    }
}

/// Body of PUT /rest/api/3/project/{projectKeyOrId}/permissionscheme
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AssignSchemeRequest {
    pub id: u64,
}

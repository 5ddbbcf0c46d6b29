//! Jira project role request models

use serde::Serialize;

/// Body of POST /rest/api/3/role
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateRoleRequest {
    pub name: String,
    pub description: String,
}

/// Body of POST /rest/api/3/project/{projectIdOrKey}/role/{id}
///
/// Empty lists are left out of the body entirely.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct AddActorsRequest {
    #[serde(rename = "groupId", skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<String>,
    #[serde(rename = "user", skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
}

//! Jira group request models

use serde::Serialize;

/// Body of POST /rest/api/3/group
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateGroupRequest {
    pub name: String,
}

/// Body of POST /rest/api/3/group/user
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddUserToGroupRequest {
    pub account_id: String,
}
